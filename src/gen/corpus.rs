// Seed corpora feeding the generators. Pure data, Indonesian-flavored to
// match the simulated locale, plus the hand-authored scripted conversation.

use lazy_static::lazy_static;
use rand::Rng;

use super::random::random_item;

pub const FIRST_NAMES: &[&str] = &[
    "Budi", "Siti", "Agus", "Putri", "Rizky", "Dewi", "Andi", "Ratna", "Eko", "Sari",
    "Joko", "Nur", "Dian", "Sri", "Tono", "Rina", "Bayu", "Wulan", "Dimas", "Lestari",
    "Adit", "Nisa", "Fajar", "Maya", "Hendra", "Yuni", "Gilang", "Fitri", "Reza", "Indah",
    "Kevin", "Tiara", "Dika", "Mega", "Yoga", "Rani", "Satria", "Intan", "Bagus", "Ayu",
    "Lukman", "Hana", "Fauzan", "Citra", "Arif", "Lina", "Gunawan", "Eka", "Rian", "Mawar",
];

pub const LAST_NAMES: &[&str] = &[
    "Santoso", "Wijaya", "Saputra", "Hidayat", "Kusuma", "Pratama", "Nugroho", "Wibowo",
    "Susanto", "Purnomo", "Suryadi", "Handayani", "Setiawan", "Utami", "Firmansyah",
    "Yuliana", "Permana", "Anggraini", "Ramadhan", "Astuti", "Maulana", "Lestari",
    "Irawan", "Rahmawati", "Wahyudi", "Hasanah", "Kurniawan", "Putri", "Sapto", "Dewi",
    "Sutrisno", "Mulyani", "Prasetyo", "Wati", "Hardianto", "Fadilah", "Nugraha",
    "Fitriani", "Baskoro", "Novitasari",
];

pub const GROUP_NAMES: &[&str] = &[
    "Keluarga Besar", "Reuni SMA 1", "Tim Marketing", "Grup Sepedaan", "Jalan-Jalan Yuk",
    "Warga RT 05", "Project Alpha", "Info Loker", "Belajar Coding", "Arisan Ibu-Ibu",
    "Futsal Rabu Malam", "Alumni Kampus", "Dagangan Online", "Komunitas Gamer",
    "Pencinta Kucing", "Grup Mabar ML", "Kuliner Bandung", "Startup Indo",
    "Diskusi Politik", "Sahabat Hijrah",
];

pub const ABOUT_STATUSES: &[&str] = &[
    "Ada", "Sibuk", "Di kantor", "Sedang rapat", "Tidur", "Panggilan darurat saja",
    "Baterai mau habis", "Sedang menyetir", "Hanya chat saja", "Be yourself",
    "Carpe Diem", "Alhamdulillah", "Never give up", "Loading...", "Stay humble",
    "Work hard play hard", "Family first", "Life is good", "Dream big",
];

pub const GROUP_ABOUT: &str = "Group chat";

pub const GREETINGS: &[&str] = &[
    "Halo", "Assalamualaikum", "Pagi", "Siang", "Sore", "Malam", "Ping", "Hai",
    "Permisi", "Woy",
];

pub const QUESTIONS: &[&str] = &[
    "Apa kabar?", "Lagi dimana?", "Sibuk gak?", "Besok jadi meeting?",
    "Udah makan belum?", "Tugas udah kelar?", "Ada waktu sebentar?",
    "Gimana progresnya?", "Kapan pulang?", "Mau nitip sesuatu gak?",
];

pub const STATEMENTS: &[&str] = &[
    "Oke siap", "OTW", "Nanti aku kabarin lagi", "Bentar ya lagi di jalan",
    "Makasih banyak ya", "Mantap jiwa", "Siap laksanakan", "Wkwkwk lucu banget",
    "Jangan lupa besok ya", "Aku udah kirim emailnya", "Transfer udah masuk gan",
    "Maaf baru bales", "Wah keren tuh", "Semangat kerjanya!", "Hati-hati di jalan",
];

pub const LONG_MESSAGES: &[&str] = &[
    "Mohon maaf mengganggu waktunya, saya mau konfirmasi untuk jadwal pertemuan besok apakah masih sesuai rencana di jam 10 pagi? Terima kasih sebelumnya.",
    "Bro, nanti sore kita jadi futsal kan? Jangan lupa bawa sepatu gue yang kemaren dipinjem ya, soalnya sepatu gue yang satu lagi jebol.",
    "Selamat siang Bapak/Ibu, berikut kami lampirkan penawaran harga untuk proyek renovasi kantor. Mohon dipelajari dan jika ada pertanyaan bisa langsung hubungi kami.",
    "Assalamualaikum, mengingatkan untuk acara pengajian rutin nanti malam di rumah Pak RT. Diharapkan kehadirannya tepat waktu. Terima kasih.",
    "Jadi gini ceritanya, kemaren gue ketemu sama dia di mall, terus dia pura-pura gak liat gitu. Padahal gue udah senyum. Aneh banget kan?",
    "Info: Server sedang maintenance dari jam 00:00 sampai 04:00. Mohon tidak melakukan transaksi pada jam tersebut untuk menghindari kegagalan sistem.",
    "Guys, liburan akhir tahun kita ke Bali aja yuk? Tiket pesawat lagi promo nih, lumayan kalo pesen dari sekarang. Gimana pada setuju gak?",
];

pub const BUSINESS_TALK: &[&str] = &[
    "Invoice sudah dikirim", "Mohon di approve", "Revisi desain ke-3",
    "Meeting diundur jam 2", "Tolong cek email", "Klien minta update",
    "Presentasi sudah siap", "Budget tidak masuk", "Deadline hari jumat", "Projek deal",
];

lazy_static! {
    /// Combined pool used for generated conversation bodies.
    pub static ref ALL_TEXTS: Vec<&'static str> = {
        let mut texts = Vec::new();
        texts.extend_from_slice(GREETINGS);
        texts.extend_from_slice(QUESTIONS);
        texts.extend_from_slice(STATEMENTS);
        texts.extend_from_slice(LONG_MESSAGES);
        texts.extend_from_slice(BUSINESS_TALK);
        texts
    };
}

/// Bodies for generated status stories.
pub const STATUS_TEXTS: &[&str] = &[
    "Hari yang indah! 🌞", "Work hard, play hard", "Coffee time ☕",
    "Ada rekomendasi film bagus?", "Alhamdulillah for everything", "Mood 😎",
    "Traffic jam... again 🚗", "Weekend vibes", "Focus on your goals",
];

/// Background tokens for generated text stories.
pub const STATUS_COLORS: &[&str] = &[
    "bg-purple-500", "bg-teal-500", "bg-indigo-500", "bg-pink-500", "bg-orange-500",
];

/// Shorter pools for stories injected while the simulation runs.
pub const LIVE_STATUS_TEXTS: &[&str] = &[
    "Work hard!", "Happy day", "Bismillah", "Otw...", "Traffic 😫",
];

pub const LIVE_STATUS_COLORS: &[&str] = &[
    "bg-purple-500", "bg-teal-500", "bg-blue-500", "bg-red-500",
];

/// Suffix set for simulated display-name edits. The empty entry lets a
/// rename strip a previous suffix without adding a new one.
pub const NAME_SUFFIXES: &[&str] = &[" 💼", " 🏠", " (Work)", " 😊", ""];

pub const ABOUT_REPLACEMENTS: &[&str] = &[
    "Available", "Busy", "At the gym", "Sleeping", "Urgent calls only",
    "Battery about to die",
];

// The scripted relationship. One hand-authored profile and conversation so
// every fresh dataset opens on the same pinned chat.

pub const SPECIAL_USER_ID: &str = "special_1";
pub const SPECIAL_USER_NAME: &str = "Dinda ❤️";
pub const SPECIAL_USER_ABOUT: &str = "Lucky to have you 🔒❤️";
pub const SPECIAL_USER_PHONE: &str = "+62 812-3456-7890";
pub const SPECIAL_USER_AVATAR: &str = "https://picsum.photos/id/65/200/200";
pub const SPECIAL_STATUS_IMAGE: &str = "https://picsum.photos/id/342/500/800";
pub const SPECIAL_STATUS_CAPTION: &str = "Missing you... 🥺";

/// Incoming-message pool for the scripted chat while the simulation runs.
pub const ROMANTIC_TEXTS: &[&str] = &[
    "Kangen deh 🥺", "Lagi apa sayang?", "Jangan lupa makan ya ❤️",
    "Nanti video call yuk?", "Sticker: ❤️", "I love you 3000",
    "Pap dongg", "Hati-hati di jalan yaa", "Semangat kerjanya sayang!",
];

pub struct ScriptLine {
    pub text: &'static str,
    pub is_mine: bool,
    pub minutes_ago: i64,
}

/// Scripted history, oldest first. The two unanswered tail lines match the
/// session's seeded unread badge.
pub const SCRIPTED_CHAT: &[ScriptLine] = &[
    ScriptLine { text: "Sayang udah bangun belum?", is_mine: false, minutes_ago: 310 },
    ScriptLine { text: "Udah dong, baru selesai sarapan 😄", is_mine: true, minutes_ago: 301 },
    ScriptLine { text: "Jangan lupa bawa jaket ya, katanya mau hujan", is_mine: false, minutes_ago: 295 },
    ScriptLine { text: "Siap bu dokter 🫡", is_mine: true, minutes_ago: 290 },
    ScriptLine { text: "Ih apaan sih wkwk", is_mine: false, minutes_ago: 288 },
    ScriptLine { text: "Nanti jadi kan jemput aku jam 5?", is_mine: false, minutes_ago: 252 },
    ScriptLine { text: "Jadi dong. Mau makan dimana kita?", is_mine: true, minutes_ago: 247 },
    ScriptLine { text: "Terserah kamu aja, aku mah ikut 😊", is_mine: false, minutes_ago: 243 },
    ScriptLine { text: "Oke nanti aku surprise ya", is_mine: true, minutes_ago: 240 },
    ScriptLine { text: "Gakk, kasih tau sekarang dong 🥺", is_mine: false, minutes_ago: 238 },
    ScriptLine { text: "Sabar, orang sabar disayang pacar", is_mine: true, minutes_ago: 230 },
    ScriptLine { text: "Kangen deh 🥺", is_mine: false, minutes_ago: 12 },
    ScriptLine { text: "Nanti malam telfon ya? ❤️", is_mine: false, minutes_ago: 8 },
];

/// Uniform pick from a static corpus. The pools above are compile-time
/// non-empty; hitting the panic means a pool was emptied by edit.
pub fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'a str]) -> &'a str {
    random_item(rng, pool).copied().expect("empty corpus pool")
}
