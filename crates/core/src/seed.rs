//! Default records written to an empty store.

use std::collections::BTreeMap;

use crate::models::{
    announcement::Announcement,
    catalog::{Badge, Currency, MarketItem, Surah, WeeklyTask},
    instructor::Instructor,
    student::{Student, StudentStatus, DEFAULT_GROUP},
};

/// Plaintext password of the seeded accounts. Hashed before it is stored.
pub const SEED_PASSWORD: &str = "123";

/// Class code owned by the seeded instructor.
pub const SEED_CLASS_CODE: &str = "1453";

pub const SURAHS: [Surah; 15] = [
    Surah { id: "duha", title: "Duha Suresi", audio_url: "https://server8.mp3quran.net/afs/093.mp3" },
    Surah { id: "insirah", title: "İnşirah Suresi", audio_url: "https://server8.mp3quran.net/afs/094.mp3" },
    Surah { id: "tin", title: "Tin Suresi", audio_url: "https://server8.mp3quran.net/afs/095.mp3" },
    Surah { id: "alak", title: "Alak Suresi", audio_url: "https://server8.mp3quran.net/afs/096.mp3" },
    Surah { id: "kadir", title: "Kadir Suresi", audio_url: "https://server8.mp3quran.net/afs/097.mp3" },
    Surah { id: "fil", title: "Fil Suresi", audio_url: "https://server8.mp3quran.net/afs/105.mp3" },
    Surah { id: "kureys", title: "Kureyş Suresi", audio_url: "https://server8.mp3quran.net/afs/106.mp3" },
    Surah { id: "maun", title: "Maun Suresi", audio_url: "https://server8.mp3quran.net/afs/107.mp3" },
    Surah { id: "kevser", title: "Kevser Suresi", audio_url: "https://server8.mp3quran.net/afs/108.mp3" },
    Surah { id: "kafirun", title: "Kafirun Suresi", audio_url: "https://server8.mp3quran.net/afs/109.mp3" },
    Surah { id: "nasr", title: "Nasr Suresi", audio_url: "https://server8.mp3quran.net/afs/110.mp3" },
    Surah { id: "tebbet", title: "Tebbet Suresi", audio_url: "https://server8.mp3quran.net/afs/111.mp3" },
    Surah { id: "ihlas", title: "İhlas Suresi", audio_url: "https://server8.mp3quran.net/afs/112.mp3" },
    Surah { id: "felak", title: "Felak Suresi", audio_url: "https://server8.mp3quran.net/afs/113.mp3" },
    Surah { id: "nas", title: "Nas Suresi", audio_url: "https://server8.mp3quran.net/afs/114.mp3" },
];

pub fn is_known_surah(id: &str) -> bool {
    SURAHS.iter().any(|s| s.id == id)
}

pub fn market_items() -> Vec<MarketItem> {
    [
        ("chocolate", "Çikolata", 300, Currency::Gp, "🍫", "Lezzetli bir ödül."),
        ("game_time", "15 Dk Oyun", 500, Currency::Gp, "🎮", "Ekstra oyun süresi."),
        ("football", "Halı Saha", 2000, Currency::Np, "⚽", "Hafta sonu maçı bileti."),
        ("toy", "Oyuncak Araba", 1500, Currency::Gp, "🏎️", "Küçük oyuncak araba."),
    ]
    .into_iter()
    .map(|(id, title, price, currency, icon, description)| MarketItem {
        id: id.to_string(),
        title: title.to_string(),
        price,
        currency,
        icon: icon.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn badges() -> Vec<Badge> {
    [
        ("namaz_kurtu", "Namaz Kurdu", "🐺", "5 Vakit namazını eksiksiz kılanlar için.", "bg-emerald-500", 100),
        ("ezber_ustasi", "Ezber Ustası", "🧠", "Haftanın en çok ezber yapanı.", "bg-indigo-500", 150),
        ("erkenci_kus", "Erkenci Kuş", "🐦", "Sabah namazına camiye gelenler.", "bg-amber-500", 50),
        ("cemaat_gulu", "Cemaat Gülü", "🌹", "Sürekli cemaatle kılanlar.", "bg-rose-500", 75),
    ]
    .into_iter()
    .map(|(id, title, icon, description, color, value)| Badge {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        value,
    })
    .collect()
}

pub fn tasks() -> Vec<WeeklyTask> {
    vec![WeeklyTask {
        id: 1,
        title: "Cuma Günü Camiye Git ve Namaz Kıl".to_string(),
        reward: 150,
        currency: Currency::Np,
        target: 1,
    }]
}

pub fn announcements() -> Vec<Announcement> {
    vec![Announcement {
        id: 1,
        title: "Hoşgeldiniz".to_string(),
        message: "Yeni dönem hayırlı olsun!".to_string(),
        date: "01.01.2024".to_string(),
        class_code: Some(SEED_CLASS_CODE.to_string()),
    }]
}

pub fn instructors(password_hash: &str) -> Vec<Instructor> {
    vec![Instructor {
        id: 1,
        name: "Hoca Ahmet".to_string(),
        username: "hoca".to_string(),
        password_hash: password_hash.to_string(),
        class_codes: vec![SEED_CLASS_CODE.to_string()],
    }]
}

pub fn students(password_hash: &str) -> Vec<Student> {
    vec![Student {
        id: 101,
        name: "Örnek Öğrenci".to_string(),
        username: "ogrenci".to_string(),
        password_hash: password_hash.to_string(),
        group: DEFAULT_GROUP.to_string(),
        status: StudentStatus::Approved,
        class_code: SEED_CLASS_CODE.to_string(),
        points: 1000,
        namaz_points: 50,
        inventory: Vec::new(),
        badges: Vec::new(),
        completed_tasks: Vec::new(),
        attendance: BTreeMap::new(),
        reading: BTreeMap::new(),
        memorization: BTreeMap::new(),
        prayers: BTreeMap::new(),
        parent_phone: None,
        student_phone: None,
    }]
}
