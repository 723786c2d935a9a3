// src/domain/i18n.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
    Tr,
    Fr,
    Zh,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Ar,
        Language::Tr,
        Language::Fr,
        Language::Zh,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Tr => "tr",
            Language::Fr => "fr",
            Language::Zh => "zh",
        }
    }

    /// Name of the language in itself, for the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
            Language::Tr => "Türkçe",
            Language::Fr => "Français",
            Language::Zh => "中文",
        }
    }

    pub fn parse(raw: &str) -> Option<Language> {
        let raw = raw.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(raw))
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

/// Rows of `(key, en, ar, tr, fr, zh)`. An empty cell falls back to English.
static STRINGS: &[(&str, [&str; 5])] = &[
    (
        "hero.title1",
        ["Discover Your", "اكتشف", "Hayalinizdeki", "Découvrez Votre", "发现您的"],
    ),
    (
        "hero.title2",
        ["Dream Home", "منزل أحلامك", "Evi Keşfedin", "Maison de Rêve", "梦想之家"],
    ),
    (
        "hero.subtitle",
        [
            "Exclusive properties in the world's most coveted locations, from London to Dubai.",
            "عقارات حصرية في أرقى المواقع حول العالم، من لندن إلى دبي.",
            "Londra'dan Dubai'ye, dünyanın en gözde konumlarında özel mülkler.",
            "Des propriétés exclusives dans les lieux les plus convoités, de Londres à Dubaï.",
            "从伦敦到迪拜，遍布全球最令人向往地段的独家房产。",
        ],
    ),
    (
        "search.title",
        ["Find the best place", "ابحث عن أفضل مكان", "En iyi yeri bulun", "Trouvez le meilleur endroit", "寻找理想之所"],
    ),
    (
        "search.looking_for",
        ["Looking for", "تبحث عن", "Aradığınız", "Vous cherchez", "寻找"],
    ),
    (
        "search.location",
        ["Location", "الموقع", "Konum", "Emplacement", "位置"],
    ),
    (
        "search.all_locations",
        ["All Locations", "كل المواقع", "Tüm Konumlar", "Tous les lieux", "所有地点"],
    ),
    (
        "search.button",
        ["Search", "بحث", "Ara", "Rechercher", "搜索"],
    ),
    (
        "grid.title1",
        ["Explore", "استكشف", "Keşfedin", "Explorez", "探索"],
    ),
    (
        "grid.title2",
        ["Top Properties", "أفضل العقارات", "Seçkin Mülkler", "Nos Propriétés", "精选房产"],
    ),
    (
        "grid.subtitle",
        [
            "Handpicked residences across our global markets.",
            "مساكن مختارة بعناية في أسواقنا العالمية.",
            "Küresel pazarlarımızdan özenle seçilmiş konutlar.",
            "Des résidences sélectionnées sur nos marchés internationaux.",
            "精选全球市场的优质住宅。",
        ],
    ),
    (
        "grid.view_all",
        ["View All Properties", "عرض كل العقارات", "Tüm Mülkleri Gör", "Voir toutes les propriétés", "查看全部房产"],
    ),
    (
        "newsletter.title",
        ["Stay Informed", "ابق على اطلاع", "Haberdar Olun", "Restez informé", "获取最新资讯"],
    ),
    (
        "newsletter.subscribe",
        ["Subscribe", "اشترك", "Abone Ol", "S'abonner", "订阅"],
    ),
    (
        "footer.rights",
        [
            "All rights reserved.",
            "جميع الحقوق محفوظة.",
            "Tüm hakları saklıdır.",
            "Tous droits réservés.",
            "版权所有。",
        ],
    ),
    ("nav.list_property", ["List Your Property", "", "", "", ""]),
];

/// Translated UI string. Unknown keys come back as the key itself.
pub fn t(key: &str, lang: Language) -> &str {
    let Some((_, row)) = STRINGS.iter().find(|(k, _)| *k == key) else {
        return key;
    };
    let idx = Language::ALL
        .iter()
        .position(|l| *l == lang)
        .unwrap_or(0);
    match row[idx] {
        "" => row[0],
        text => text,
    }
}
