//! Compiled-in site content.
//!
//! Everything here is fixed at build time: the portfolio catalog, the service
//! and pricing tables, testimonials, client logos and brand contact details.
//! Nothing is added, removed or mutated at runtime.

pub const BRAND_NAME: &str = "Click Sales Media";
pub const BRAND_NAME_AR: &str = "كليك سيلز ميديا";
pub const LOGO: &str = "/clicksalesmedialogo.png";
pub const HERO_IMAGE: &str = "/hero.webp";
pub const EMAIL: &str = "info@clicksalesmedia.com";
pub const PHONE_DISPLAY: &str = "+971 50 341 2174";
pub const ADDRESS: &str = "ند الشبا, دبي, الامارات العربية المتحدة";

/// In-page navigation anchors, in display order.
pub static NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "الرئيسية"),
    ("#services", "خدماتنا"),
    ("#portfolio", "أعمالنا"),
    ("#pricing", "الأسعار"),
    ("#contact", "تواصل معنا"),
];

/// A delivered client project shown in the portfolio grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub features: &'static [&'static str],
    pub website: &'static str,
}

pub static PROJECTS: [Project; 9] = [
    Project {
        image: "/portfolio/avadaparfum.png",
        title: "أفادا العطور",
        description: "متجر إلكتروني فاخر للعطور والأزياء",
        full_description: "أفادا العطور هو متجر إلكتروني فاخر متخصص في بيع العطور والأزياء العصرية. تم تصميم الموقع بأحدث التقنيات لتوفير تجربة تسوق استثنائية للعملاء مع واجهة أنيقة وسهلة الاستخدام.",
        features: &[
            "تصميم واجهة أنيقة ومتجاوبة",
            "نظام دفع إلكتروني آمن ومتعدد",
            "كتالوج منتجات تفاعلي",
            "نظام إدارة المخزون",
            "تحسين محركات البحث SEO",
            "دعم اللغتين العربية والإنجليزية",
        ],
        website: "https://avadaparfum.com",
    },
    Project {
        image: "/portfolio/harmony.png",
        title: "هارموني",
        description: "موقع إلكتروني عصري ومتجاوب",
        full_description: "موقع هارموني هو منصة رقمية عصرية تهدف إلى تقديم خدمات متنوعة بتصميم أنيق ومتجاوب. تم تطوير الموقع ليكون سريع التحميل ومحسن لجميع الأجهزة.",
        features: &[
            "تصميم عصري ومتجاوب",
            "أداء عالي وسرعة تحميل فائقة",
            "تحسين تجربة المستخدم UX/UI",
            "تطوير بتقنيات حديثة",
            "دعم جميع المتصفحات",
            "تحسين محركات البحث",
        ],
        website: "https://harmony-example.com",
    },
    Project {
        image: "/portfolio/wse.png",
        title: "WSE - وول ستريت إنجلش",
        description: "صفحة هبوط تعليمية لتعلم اللغة الإنجليزية أونلاين",
        full_description: "صفحة هبوط احترافية لمعهد وول ستريت إنجلش لتعليم اللغة الإنجليزية أونلاين. تم تصميم الصفحة لتحويل الزوار إلى طلاب مسجلين من خلال عرض مميزات التعلم الأونلاين وشهادات الطلاب والخبرة العريقة للمعهد.",
        features: &[
            "صفحة هبوط محسنة للتحويل",
            "تصميم متجاوب لجميع الأجهزة",
            "نماذج تسجيل تفاعلية",
            "عرض مميزات التعلم الأونلاين",
            "شهادات وتقييمات الطلاب",
            "أقسام للخبراء والاستشارة",
            "أنظمة دفع متعددة ومرنة",
            "تحسين محركات البحث SEO",
            "تتبع التحويلات والتحليلات",
            "محتوى مصمم للسوق السعودي",
        ],
        website: "https://campaign.wallstreetenglish.edu.sa/",
    },
    Project {
        image: "/portfolio/scs.png",
        title: "SCS",
        description: "موقع تسويقي لجلب العملاء المحتملين",
        full_description: "SCS يقدم حلول تقنية متقدمة ومبتكرة للشركات التي تسعى للتطور الرقمي. تم تصميم النظام ليلبي احتياجات الأعمال الحديثة بكفاءة وفعالية عالية.",
        features: &[
            "حلول تقنية مبتكرة ومتطورة",
            "تطوير أنظمة مخصصة",
            "تكامل مع الأنظمة الموجودة",
            "واجهات برمجة تطبيقات API",
            "أمان وحماية البيانات",
            "دعم تقني متخصص",
        ],
        website: "https://cafardservices.com",
    },
    Project {
        image: "/portfolio/tohatsu.png",
        title: "توهاتسو",
        description: "موقع شركة صناعية احترافي",
        full_description: "موقع شركة توهاتسو الصناعية هو منصة رقمية احترافية تعرض منتجات وخدمات الشركة الصناعية. تم تصميم الموقع ليعكس قوة ومهنية الشركة في القطاع الصناعي.",
        features: &[
            "تصميم احترافي يعكس هوية الشركة",
            "عرض المنتجات والخدمات الصناعية",
            "نظام استعلامات وطلبات",
            "معرض صور ومقاطع فيديو",
            "معلومات تفصيلية عن الشركة",
            "نماذج التواصل المتقدمة",
        ],
        website: "https://tohatsuarabia.com",
    },
    Project {
        image: "/portfolio/greenroasteries.png",
        title: "المحامص الخضراء",
        description: "متجر إلكتروني للقهوة والمحامص",
        full_description: "المحامص الخضراء هو متجر إلكتروني متخصص في بيع القهوة والمحامص عالية الجودة. يوفر الموقع تجربة تسوق مميزة لعشاق القهوة مع أنواع مختارة من أجود أنواع القهوة.",
        features: &[
            "متجر إلكتروني متخصص في القهوة",
            "كتالوج منتجات تفاعلي ومصور",
            "نظام طلبات وتوصيل",
            "معلومات تفصيلية عن أنواع القهوة",
            "نظام تقييم ومراجعات",
            "برنامج ولاء العملاء",
        ],
        website: "https://thegreenroasteries.com",
    },
    Project {
        image: "/portfolio/mydoctorclinic.png",
        title: "عيادة دكتور كلينك",
        description: "موقع عيادة طبية متقدم",
        full_description: "عيادة دكتور كلينك هو موقع طبي متطور يقدم خدمات طبية شاملة مع نظام حجز مواعيد إلكتروني. تم تصميم الموقع لتوفير تجربة مريحة للمرضى مع واجهة سهلة الاستخدام.",
        features: &[
            "نظام حجز مواعيد إلكتروني",
            "ملفات المرضى الرقمية",
            "استشارات طبية أونلاين",
            "عرض الخدمات الطبية",
            "تذكير بالمواعيد",
            "نظام دفع آمن للخدمات",
        ],
        website: "https://kw.my-doctor-dental.com",
    },
    Project {
        image: "/portfolio/zeroglissage.png",
        title: "زيرو جليساج",
        description: "حلول مبتكرة لمنع الانزلاق",
        full_description: "زيرو جليساج هو موقع متخصص في تقديم حلول مبتكرة لمنع الانزلاق وضمان السلامة. يوفر الموقع معلومات شاملة عن المنتجات والخدمات مع واجهة عصرية وسهلة التصفح.",
        features: &[
            "عرض شامل للمنتجات والحلول",
            "تصميم عصري ومهني",
            "معلومات تقنية مفصلة",
            "نظام طلب عروض أسعار",
            "دراسات حالة وأمثلة",
            "دعم فني متخصص",
        ],
        website: "https://zeroglissage.com",
    },
    Project {
        image: "/portfolio/newrayan.png",
        title: "نيو ريان للأسنان",
        description: "عيادة أسنان متطورة",
        full_description: "نيو ريان للأسنان هو موقع عيادة أسنان متطورة يوفر خدمات طب الأسنان الشاملة. تم تصميم الموقع بواجهة جذابة ونظام حجز مواعيد متطور لضمان أفضل خدمة للمرضى.",
        features: &[
            "نظام حجز مواعيد متطور",
            "عرض خدمات طب الأسنان",
            "معرض صور للنتائج",
            "معلومات الأطباء والخبرات",
            "نصائح طبية وإرشادات",
            "تواصل مباشر مع العيادة",
        ],
        website: "https://kw.new-rayan-dental.com",
    },
];

/// An offered service rendered in the services grid and the offer catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static SERVICES: [Service; 6] = [
    Service {
        icon: "globe",
        title: "تصميم المواقع الإلكترونية",
        description: "مواقع احترافية سريعة ومتجاوبة مع جميع الأجهزة",
        features: &["تصميم عصري", "سرعة فائقة", "متوافق مع الجوال", "SEO محسن"],
    },
    Service {
        icon: "cart",
        title: "المتاجر الإلكترونية",
        description: "متاجر رقمية متكاملة لبيع منتجاتك أونلاين",
        features: &["نظام دفع آمن", "إدارة المخزون", "تتبع الطلبات", "تقارير مفصلة"],
    },
    Service {
        icon: "zap",
        title: "أدوات التسويق والتتبع",
        description: "أدوات متطورة لتتبع وتحليل أداء حملاتك التسويقية",
        features: &["تتبع التحويلات", "تحليل البيانات", "إعداد التقارير", "مراقبة الأداء"],
    },
    Service {
        icon: "rocket",
        title: "التسويق الرقمي",
        description: "استراتيجيات تسويقية فعالة لنمو عملك",
        features: &[
            "إدارة السوشيال ميديا",
            "إعلانات مدفوعة",
            "تحسين محركات البحث",
            "استراتيجيات المحتوى",
        ],
    },
    Service {
        icon: "users",
        title: "الاستضافة والدعم",
        description: "خدمات استضافة موثوقة مع دعم فني متواصل",
        features: &["أمان عالي", "نسخ احتياطية", "دعم 24/7", "سرعة استجابة"],
    },
    Service {
        icon: "phone",
        title: "الاستشارات التقنية",
        description: "استشارات متخصصة لتطوير استراتيجيتك الرقمية",
        features: &["تحليل الأعمال", "خطط استراتيجية", "دراسة المنافسين", "توصيات مخصصة"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u32,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "هنادي",
        role: "الرئيس التنفيذي - Pure N Bio",
        content: "نحن في غاية السعادة بالمتجر الإلكتروني الذي طوره فريق كليك سيلز ميديا. الأداء ممتاز والمبيعات في تزايد مستمر. التصميم احترافي ويعكس هوية علامتنا التجارية بشكل مثالي. شكراً لكم على الجهود المبذولة.",
        rating: 5,
    },
    Testimonial {
        name: "أنس",
        role: "الرئيس التنفيذي - توهاتسو السعودية",
        content: "الموقع الإلكتروني الذي أنجزوه لنا أنيق وعصري ومحسن بطريقة احترافية. نحن راضون جداً عن النتائج وسرعة الأداء. الفريق متعاون ومتفهم لاحتياجاتنا التجارية. أنصح بالتعامل معهم بقوة.",
        rating: 5,
    },
    Testimonial {
        name: "مروة",
        role: "رئيسة قسم التسويق - عيادة نيو ريان",
        content: "كليك سيلز ميديا ساعدتنا كثيراً في تحسين موقعنا الإلكتروني و SEO وإنشاء صفحات الهبوط التسويقية. النتائج فاقت توقعاتنا والزيارات زادت بشكل ملحوظ. فريق محترف ويفهم متطلبات التسويق الرقمي الحديث.",
        rating: 5,
    },
    Testimonial {
        name: "محمود",
        role: "رئيس القسم التجاري - وول ستريت السعودية",
        content: "كليك سيلز ميديا ساعدتنا في أتمتة موقعنا الإلكتروني باستخدام الذكاء الاصطناعي و APIs المتقدمة. الموقع أصبح أكثر ديناميكية وتفاعلاً. النتائج التي نحققها الآن رائعة والعملاء راضون عن التجربة الجديدة.",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "صفحات الهبوط",
        description: "مثالية للحملات التسويقية والترويج",
        features: &[
            "تجربة مستخدم متميزة (UX)",
            "أداء فائق السرعة",
            "هيكل تسويقي محترف",
            "نماذج تفاعلية متقدمة",
            "تكامل واتساب",
            "نظام تتبع العملاء والمبيعات",
            "تكامل نظام إدارة العملاء (CRM)",
        ],
        popular: false,
    },
    PricingPlan {
        name: "المواقع الإلكترونية",
        description: "حلول شاملة للأعمال والشركات",
        features: &[
            "تجربة مستخدم متميزة (UX)",
            "أداء فائق السرعة",
            "تصميم عصري ومتجاوب",
            "نماذج تفاعلية متقدمة",
            "تكامل واتساب",
            "نظام تتبع العملاء والمبيعات",
            "تكامل نظام إدارة العملاء (CRM)",
            "عدة صفحات متخصصة",
            "متجر إلكتروني أساسي",
            "لوحة تحكم إدارية",
            "تحسين محركات البحث (SEO)",
            "دعم متعدد اللغات",
            "استضافة مجانية لمدة سنتين",
        ],
        popular: true,
    },
    PricingPlan {
        name: "المتاجر الإلكترونية",
        description: "منصة تجارة إلكترونية متكاملة ومتطورة",
        features: &[
            "تصميم عصري ومرن",
            "سهولة استخدام للعملاء",
            "كتالوج منتجات شامل",
            "تحسين صفحات المنتجات",
            "تحسين الثقة الاجتماعية",
            "تحسين نظام المراجعات",
            "بوابة إدارة شاملة",
            "نظام العروض والحزم",
            "أمان وحماية متقدمة",
            "تكامل بوابات الدفع",
            "تصميم ونظام فريد",
            "استضافة مجانية لمدة 5 سنوات",
        ],
        popular: false,
    },
];

/// Client logo assets under /clients, in carousel order.
pub static CLIENT_LOGOS: [&str; 13] = [
    "thegreenroasteries-logo.png",
    "wse.png",
    "ses-school-logo-clicksalesmedia.png",
    "storage.png",
    "mahadahlan.png",
    "lavivianex.png",
    "maeva-2.png",
    "inspeedglobal-1.png",
    "joynt-1.png",
    "eshraq.png",
    "erosforlady.png",
    "bajunaid-company.png",
    "aaa-Logo.png",
];

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn catalog_is_nine_fixed_projects() {
        assert_eq!(PROJECTS.len(), 9);
    }

    #[test]
    fn catalog_records_are_complete() {
        for project in &PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.full_description.is_empty());
            assert!(!project.features.is_empty());
            assert!(project.image.starts_with("/portfolio/"));

            let website = Url::parse(project.website).unwrap();
            assert_eq!(website.scheme(), "https");
        }
    }

    #[test]
    fn services_cover_every_icon_once() {
        assert_eq!(SERVICES.len(), 6);
        for service in &SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.features.is_empty());
        }
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        assert_eq!(PLANS.len(), 3);
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn testimonial_ratings_are_five_star_scale() {
        assert_eq!(TESTIMONIALS.len(), 4);
        for testimonial in &TESTIMONIALS {
            assert!((1..=5).contains(&testimonial.rating));
        }
    }

    #[test]
    fn client_carousel_has_thirteen_logos() {
        assert_eq!(CLIENT_LOGOS.len(), 13);
    }
}
