//! Page copy keyed by locale
//!
//! The landing page exists in Uzbek (as first published) and English. Both
//! share one component tree; only the data in this module differs.

use std::fmt;
use std::str::FromStr;

use super::anchor::{anchor_href, anchor_id};

/// Supported page languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Uz,
    En,
}

/// Returned when a locale code is not one of the supported languages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale '{0}' (expected 'uz' or 'en')")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Uz, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::En => "en",
        }
    }

    /// Value for the `<html lang>` attribute
    pub fn html_lang(&self) -> &'static str {
        self.as_str()
    }

    /// Route that serves this locale explicitly
    pub fn path(&self) -> &'static str {
        match self {
            Locale::Uz => "/uz",
            Locale::En => "/en",
        }
    }

    /// Where "home" points for this locale: `/` when it is the served
    /// default, its explicit route otherwise
    pub fn home_path(&self, default: Locale) -> &'static str {
        if *self == default { "/" } else { self.path() }
    }

    /// The copy for this locale
    pub fn content(&self) -> &'static PageContent {
        PageContent::for_locale(*self)
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uz" | "uz-latn" | "uz-uz" => Ok(Locale::Uz),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page sections reachable from the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    AiFeatures,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Home, SectionId::Services, SectionId::AiFeatures];

    /// Locale-independent slug, used only when a section has no nav entry
    pub fn slug(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::AiFeatures => "ai-features",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

impl NavItem {
    pub fn anchor(&self) -> String {
        anchor_id(self.label)
    }

    pub fn href(&self) -> String {
        anchor_href(self.label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screenshot {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_label: &'static str,
    pub left: Screenshot,
    pub right: Screenshot,
}

/// Icon shown on a service card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    BookOpen,
    Users,
    MessageSquare,
    Home,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiFeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSection<T: 'static> {
    pub title: &'static str,
    pub cards: &'static [T],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    Twitter,
}

impl SocialNetwork {
    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Twitter => "Twitter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterContent {
    pub copyright: &'static str,
    pub socials: &'static [SocialLink],
    pub website: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

impl FooterContent {
    /// Single contact line: website, phone and email separated by bars
    pub fn contact_line(&self) -> String {
        format!("{} | {} | {}", self.website, self.phone, self.email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeoContent {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotFoundContent {
    pub title: &'static str,
    pub description: &'static str,
    pub home_label: &'static str,
}

/// All copy rendered by the landing page for one locale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub locale: Locale,
    pub brand: &'static str,
    pub menu_toggle_label: &'static str,
    pub nav: &'static [NavItem],
    pub hero: HeroContent,
    pub features: CardSection<FeatureCard>,
    pub ai_features: CardSection<AiFeatureCard>,
    pub footer: FooterContent,
    pub seo: SeoContent,
    pub not_found: NotFoundContent,
}

impl PageContent {
    pub fn for_locale(locale: Locale) -> &'static PageContent {
        match locale {
            Locale::Uz => &UZ,
            Locale::En => &EN,
        }
    }

    /// Nav entry pointing at a section, if the navigation lists it
    pub fn nav_item(&self, section: SectionId) -> Option<&'static NavItem> {
        self.nav.iter().find(|item| item.section == section)
    }

    /// DOM id of a section, derived from the label of its nav entry
    pub fn section_anchor(&self, section: SectionId) -> String {
        self.nav_item(section)
            .map(NavItem::anchor)
            .unwrap_or_else(|| section.slug().to_string())
    }
}

const SCREENSHOT_LEFT: &str = "https://s3.timeweb.cloud/729e17de-andasoft-buckets/1.png";
const SCREENSHOT_RIGHT: &str = "https://s3.timeweb.cloud/729e17de-andasoft-buckets/2.png";

const SOCIALS: &[SocialLink] = &[
    SocialLink {
        network: SocialNetwork::Facebook,
        href: "#",
    },
    SocialLink {
        network: SocialNetwork::Instagram,
        href: "#",
    },
    SocialLink {
        network: SocialNetwork::Twitter,
        href: "#",
    },
];

const WEBSITE: &str = "www.Study-Track.com";
const PHONE: &str = "+998940435349";
const EMAIL: &str = "studytrack347@gmail.com";

static UZ: PageContent = PageContent {
    locale: Locale::Uz,
    brand: "StudyTrack",
    menu_toggle_label: "Menyuni ochish/yopish",
    nav: &[
        NavItem {
            label: "Bosh sahifa",
            section: SectionId::Home,
        },
        NavItem {
            label: "Xizmatlar",
            section: SectionId::Services,
        },
        NavItem {
            label: "AI imkoniyatlari",
            section: SectionId::AiFeatures,
        },
    ],
    hero: HeroContent {
        title: "Ta'lim Sifatini Yaxshilashga Yangicha Yondashuv",
        subtitle: "Bizning platformamiz yordamida bilim olish endi nafaqat samarali, balki maroqli ham bo'ladi.",
        cta_label: "Boshlash",
        left: Screenshot {
            src: SCREENSHOT_LEFT,
            alt: "Chap skrinshot",
        },
        right: Screenshot {
            src: SCREENSHOT_RIGHT,
            alt: "O'ng skrinshot",
        },
    },
    features: CardSection {
        title: "Bizning Xizmatlarimiz",
        cards: &[
            FeatureCard {
                icon: FeatureIcon::BookOpen,
                title: "Interaktiv darslar",
                description: "Qiziqarli va interaktiv darslar orqali bilimlaringizni mustahkamlang.",
            },
            FeatureCard {
                icon: FeatureIcon::Users,
                title: "Oson yondashuv",
                description: "Ta'lim olish jarayonini osonlashtirish uchun ishlab chiqilgan innovatsion vositalar va resurslar.",
            },
            FeatureCard {
                icon: FeatureIcon::MessageSquare,
                title: "Qo'llab-quvvatlash",
                description: "Mutaxassislar va o'qituvchilar tomonidan berilgan yordamlardan foydalanish mumkin.",
            },
            FeatureCard {
                icon: FeatureIcon::Home,
                title: "Moslashuvchanlik",
                description: "O'zingizga qulay vaqtda va joyda ta'lim olish imkoniyatlari.",
            },
        ],
    },
    ai_features: CardSection {
        title: "Intellektual O'rganish: AI Bilan Bilim Cho'qqilariga",
        cards: &[
            AiFeatureCard {
                title: "SUN'IY INTELLEKT ASOSIDAGI TAVSIYALAR",
                description: "Sun'iy intellekt tizimimiz sizning o'quv jarayoningizni kuzatib boradi va eng mos kurslar, materiallar va mashqlarni tavsiya qiladi.",
            },
            AiFeatureCard {
                title: "REAL VAQTDA FEEDBACK",
                description: "Sun'iy intellekt real vaqt rejimida javoblaringizni baholab, tezda fikr-mulohazalar beradi, bu esa sizga xatolaringizni tezda tuzatishga yordam beradi.",
            },
            AiFeatureCard {
                title: "PROGRESS MONITORING",
                description: "Sun'iy intellekt sizning muvaffaqiyatlaringizni va rivojlanishingizni kuzatib boradi, sizga shaxsiy rivojlanish hisobotlarini taqdim etadi.",
            },
        ],
    },
    footer: FooterContent {
        copyright: "© 2024 StudyTrack. Barcha huquqlar himoyalangan.",
        socials: SOCIALS,
        website: WEBSITE,
        phone: PHONE,
        email: EMAIL,
        address: "Toshkent 100084, Amir Temur shox ko'chasi 108 uy",
    },
    seo: SeoContent {
        title: "StudyTrack - Ta'lim sifatini yaxshilash platformasi",
        description: "StudyTrack: interaktiv darslar, sun'iy intellekt asosidagi tavsiyalar va real vaqtdagi fikr-mulohazalar bilan ta'lim platformasi.",
    },
    not_found: NotFoundContent {
        title: "Sahifa topilmadi",
        description: "Siz qidirayotgan sahifa mavjud emas yoki ko'chirilgan.",
        home_label: "Bosh sahifaga qaytish",
    },
};

static EN: PageContent = PageContent {
    locale: Locale::En,
    brand: "StudyTrack",
    menu_toggle_label: "Toggle menu",
    nav: &[
        NavItem {
            label: "Home",
            section: SectionId::Home,
        },
        NavItem {
            label: "Services",
            section: SectionId::Services,
        },
        NavItem {
            label: "AI Capabilities",
            section: SectionId::AiFeatures,
        },
    ],
    hero: HeroContent {
        title: "A New Approach to Better Education",
        subtitle: "With our platform, learning becomes not only effective but enjoyable too.",
        cta_label: "Get Started",
        left: Screenshot {
            src: SCREENSHOT_LEFT,
            alt: "Left screenshot",
        },
        right: Screenshot {
            src: SCREENSHOT_RIGHT,
            alt: "Right screenshot",
        },
    },
    features: CardSection {
        title: "Our Services",
        cards: &[
            FeatureCard {
                icon: FeatureIcon::BookOpen,
                title: "Interactive lessons",
                description: "Strengthen your knowledge through engaging, interactive lessons.",
            },
            FeatureCard {
                icon: FeatureIcon::Users,
                title: "Easy approach",
                description: "Innovative tools and resources designed to make learning easier.",
            },
            FeatureCard {
                icon: FeatureIcon::MessageSquare,
                title: "Support",
                description: "Get help from experts and teachers whenever you need it.",
            },
            FeatureCard {
                icon: FeatureIcon::Home,
                title: "Flexibility",
                description: "Learn at the time and place that suits you best.",
            },
        ],
    },
    ai_features: CardSection {
        title: "Intelligent Learning: Reach New Heights with AI",
        cards: &[
            AiFeatureCard {
                title: "AI-POWERED RECOMMENDATIONS",
                description: "Our AI follows your learning progress and recommends the most suitable courses, materials and exercises.",
            },
            AiFeatureCard {
                title: "REAL-TIME FEEDBACK",
                description: "The AI grades your answers in real time and gives quick feedback so you can fix mistakes right away.",
            },
            AiFeatureCard {
                title: "PROGRESS MONITORING",
                description: "The AI tracks your achievements and growth and provides personal progress reports.",
            },
        ],
    },
    footer: FooterContent {
        copyright: "© 2024 StudyTrack. All rights reserved.",
        socials: SOCIALS,
        website: WEBSITE,
        phone: PHONE,
        email: EMAIL,
        address: "108 Amir Temur Avenue, Tashkent 100084",
    },
    seo: SeoContent {
        title: "StudyTrack - A better way to learn",
        description: "StudyTrack: interactive lessons, AI-powered recommendations and real-time feedback in one education platform.",
    },
    not_found: NotFoundContent {
        title: "Page Not Found",
        description: "The page you're looking for doesn't exist or has been moved.",
        home_label: "Go Home",
    },
};
