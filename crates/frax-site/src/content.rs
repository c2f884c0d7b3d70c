//! Page content compiled into the binary.

use std::fmt;

/// Site and company name.
pub const LAB_NAME: &str = "frax labs";

/// Status lines shown above the clock in the sidebar.
pub const LAB_STATUS: &str = "SYSTEM // ACTIVE";
pub const LAB_CORE: &str = "CORE // ISTANBUL";
pub const LAB_INDEX: &str = "INDEX // FL_026";

/// Release status of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    Upcoming,
    /// Any other free-form label.
    Other(&'static str),
}

impl ProjectStatus {
    /// Label shown next to the status dot.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "LIVE",
            ProjectStatus::Upcoming => "UPCOMING",
            ProjectStatus::Other(label) => *label,
        }
    }

    /// Whether the project is not available yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, ProjectStatus::Upcoming)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the project lab list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub status: ProjectStatus,
    pub link: Option<&'static str>,
}

/// The flagship product, also linked from the project list.
pub const FLAGSHIP_URL: &str = "https://ugra.frax.tr/";

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Ugra",
        status: ProjectStatus::Live,
        link: Some(FLAGSHIP_URL),
    },
    ProjectRecord {
        title: "Mera",
        status: ProjectStatus::Upcoming,
        link: None,
    },
    ProjectRecord {
        title: "Vision Flow",
        status: ProjectStatus::Upcoming,
        link: None,
    },
    ProjectRecord {
        title: "Frax Connect",
        status: ProjectStatus::Upcoming,
        link: None,
    },
];

/// Number and label of a page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionMeta {
    pub num: &'static str,
    pub label: &'static str,
}

impl SectionMeta {
    /// Heading text, e.g. `01 :: VİZYON`.
    pub fn heading(&self) -> String {
        format!("{} :: {}", self.num, self.label)
    }
}

pub const VISION: SectionMeta = SectionMeta { num: "01", label: "VİZYON" };
pub const ABOUT: SectionMeta = SectionMeta { num: "02", label: "BİZ KİMİZ?" };
pub const OPERATING_MODEL: SectionMeta = SectionMeta { num: "03", label: "OPERASYONEL MODEL" };
pub const PROJECT_LAB: SectionMeta = SectionMeta { num: "04", label: "PROJE LABORATUVARI" };
pub const FLAGSHIP: SectionMeta = SectionMeta { num: "05", label: "AMİRAL GEMİSİ ÜRÜN" };
pub const MANIFESTO: SectionMeta = SectionMeta { num: "06", label: "MANİFESTO" };
pub const CONTACT: SectionMeta = SectionMeta { num: "07", label: "İLETİŞİM" };

/// All sections in page order.
pub const SECTIONS: &[SectionMeta] = &[
    VISION,
    ABOUT,
    OPERATING_MODEL,
    PROJECT_LAB,
    FLAGSHIP,
    MANIFESTO,
    CONTACT,
];

pub const VISION_TEXT: &str = "İnsan zekasını otonom sistemlerle güçlendirerek, işletmelerin kendi kendini yönetebildiği dijital bir ekosistem inşa etmek.";

pub const ABOUT_TEXT: &str = "Frax, 2026 yılında İstanbul merkezli olarak iki ortaklı bir yapı ile kurulan genç ve dinamik bir teknoloji şirketidir. Yenilikçi çözümler üretme tutkusuyla yola çıkan ekibimiz, dijital dönüşümü işletmeler için en basit ve verimli hale getirmeyi amaçlamaktadır.";

pub const OPERATING_MODEL_TEXT: &str = "Fikirleri somut ürünlere dönüştüren, hızlı prototipleme ve sürekli deney disipliniyle hareket ediyoruz.";

pub const METHODOLOGY_TITLE: &str = "// Metodoloji";

pub const METHODOLOGY: &[&str] = &[
    "Seri Üretim",
    "Hızlı Prototipleme",
    "Sürekli Deney",
    "Ticarileştirme veya Sonlandırma",
];

/// Flagship product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagshipProduct {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub id: &'static str,
    pub stage: &'static str,
    pub call_to_action: &'static str,
    pub url: &'static str,
}

pub const FLAGSHIP_PRODUCT: FlagshipProduct = FlagshipProduct {
    name: "Ugra",
    tagline: "Otonom İşletme İşletim Sistemi",
    description: "Ugra, PWA mimarisiyle uygulama indirme bariyerini kaldıran ve AI desteğiyle işletme yönetimini otonom hale getiren bir sadakat platformudur. İşletme sahipleri için veriyi proaktif kararlara dönüştüren dijital bir iş ortağıdır.",
    id: "ID: 101",
    stage: "STATUS: ACTIVE_ALPHA",
    call_to_action: "İNCELE",
    url: FLAGSHIP_URL,
};

pub const MANIFESTO_INTRO: &str = "Frax Labs olarak biz, dijitalleşmenin sadece kod yazmaktan ibaret olmadığına inanıyoruz.";

pub const MISSION_TITLE: &str = "// MİSYON";

/// A named principle in the manifesto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Principle {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Yalınlık Güçtür:",
        body: "Karmaşıklığı değil, en basit ve işlevsel olanı hedefliyoruz.",
    },
    Principle {
        title: "Veri Odaklı Sezgi:",
        body: "Kararlarımızı varsayımlar üzerine değil, doğrulanmış veriler ve yapay zeka analitiği üzerine inşa ediyoruz.",
    },
    Principle {
        title: "Yerel Bağlantı:",
        body: "Yüksek teknolojiyi küresel standartlarda üretip, yerel esnafın ve mahalle kültürünün hizmetine sunuyoruz.",
    },
    Principle {
        title: "Hız ve Doğruluk:",
        body: "Hızı gelişimin anahtarı olarak görüyor, her geri bildirimle sistemimizi daha akıllı bir yapıya kavuşturuyoruz.",
    },
];

pub const MANIFESTO_CLOSING: &str = "/* Gelecek, otonom sistemlerle değil, bu sistemleri anlamlı kılan insan odaklı vizyonla kurulacaktır. */";

pub const CONTACT_EMAIL: &str = "info@fraxlabs.co";
pub const CONTACT_LOCATION: &str = "İstanbul, TR";

/// `mailto:` link for the contact address.
pub fn contact_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub const FOOTER_RIGHTS: &str = "// ALL RIGHTS RESERVED";
pub const FOOTER_EST: &str = "EST. 2026 // TR";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_numbered_in_order() {
        assert_eq!(SECTIONS.len(), 7);
        for (i, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.num, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn test_section_heading_format() {
        assert_eq!(VISION.heading(), "01 :: VİZYON");
        assert_eq!(CONTACT.heading(), "07 :: İLETİŞİM");
    }

    #[test]
    fn test_exactly_one_live_project() {
        let live: Vec<_> = PROJECTS
            .iter()
            .filter(|p| p.status == ProjectStatus::Live)
            .collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].link, Some(FLAGSHIP_URL));
    }

    #[test]
    fn test_only_upcoming_is_pending() {
        assert!(ProjectStatus::Upcoming.is_pending());
        assert!(!ProjectStatus::Live.is_pending());
        assert!(!ProjectStatus::Other("BETA").is_pending());
        assert_eq!(ProjectStatus::Other("BETA").label(), "BETA");
    }

    #[test]
    fn test_contact_href() {
        assert_eq!(contact_href(), "mailto:info@fraxlabs.co");
    }
}
