use crate::i18n::Localized;

const fn l(ja: &'static str, en: &'static str) -> Localized {
    Localized::new(ja, en)
}

pub struct NavItem {
    pub id: &'static str,
    pub label: Localized,
}

pub const NAV: &[NavItem] = &[
    NavItem { id: "top", label: l("トップ", "Top") },
    NavItem { id: "services", label: l("事業内容", "Services") },
    NavItem { id: "works", label: l("実績", "Works") },
    NavItem { id: "company", label: l("会社概要", "Company") },
    NavItem { id: "message", label: l("代表メッセージ", "Message") },
    NavItem { id: "contact", label: l("お問い合わせ", "Contact") },
];

pub struct Service {
    pub title: Localized,
    pub description: Localized,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: l("賃貸運営・管理（自社保有／再生含む）", "Leasing & Property Management"),
        description: l(
            "運営・リーシング・修繕計画・現場対応まで。長期運用を見据えた安定稼働を支援します。",
            "Operations, leasing, maintenance planning, and on‑site response for stable long‑term operations.",
        ),
    },
    Service {
        title: l("リフォーム／リノベ設計・施工", "Renovation Design & Build"),
        description: l(
            "企画・設計・施工管理。DIYと専門工事のハイブリッドでコスト最適化。",
            "Planning, design, and construction management. Hybrid DIY + professional works for cost optimization.",
        ),
    },
    Service {
        title: l("古民家再生・活用コンサル", "Traditional House Revitalization"),
        description: l(
            "現地調査、再生プラン、コスト・収支試算、補助金検討まで伴走。",
            "Site survey, revitalization plan, cost/returns modeling, and subsidy review.",
        ),
    },
    Service {
        title: l("宿泊事業（旅館業／住宅宿泊）", "Hospitality (Ryokan / Minpaku)"),
        description: l(
            "行政協議、消防・保健所対応、運営設計、OTA掲載・運用まで。",
            "Permits coordination, fire/health compliance, operations design, OTA listing & operations.",
        ),
    },
    Service {
        title: l("建材・インテリア企画・販売", "Materials & Interior Curation"),
        description: l(
            "内装材・家具のセレクト、スタイリング提案・販売。",
            "Selection of finishes and furniture, styling proposals and sales.",
        ),
    },
];

/// One entry of the works gallery. Position in [`WORKS`] is its only identity.
#[derive(Debug, PartialEq)]
pub enum WorkItem {
    Single {
        image: &'static str,
        title: Localized,
        location: Option<Localized>,
        description: Option<Localized>,
    },
    Comparison {
        before: &'static str,
        after: &'static str,
        title: Localized,
        location: Option<Localized>,
        description: Option<Localized>,
    },
}

impl WorkItem {
    pub fn title(&self) -> &Localized {
        match self {
            WorkItem::Single { title, .. } | WorkItem::Comparison { title, .. } => title,
        }
    }

    pub fn location(&self) -> Option<&Localized> {
        match self {
            WorkItem::Single { location, .. } | WorkItem::Comparison { location, .. } => {
                location.as_ref()
            }
        }
    }

    pub fn description(&self) -> Option<&Localized> {
        match self {
            WorkItem::Single { description, .. } | WorkItem::Comparison { description, .. } => {
                description.as_ref()
            }
        }
    }
}

const KUMAGAYA: Localized = l(
    "埼玉県熊谷市古民家（築64年）",
    "Traditional house in Kumagaya, Saitama (64 years old)",
);

pub const WORKS: &[WorkItem] = &[
    WorkItem::Single {
        image: "works/living_renovation.jpg",
        title: l("リビング リノベーション事例", "Living Room Renovation"),
        location: Some(l(
            "東京都あきる野市古民家（築50年）",
            "Traditional house in Akiruno, Tokyo (50 years old)",
        )),
        description: None,
    },
    WorkItem::Single {
        image: "works/japanese_room.jpg",
        title: l("和室のリノベーション事例", "Japanese Room Renovation"),
        location: Some(KUMAGAYA),
        description: None,
    },
    WorkItem::Comparison {
        before: "works/kitchen_before.jpg",
        after: "works/kitchen.jpg",
        title: l("キッチンのリノベーション事例", "Kitchen Renovation"),
        location: Some(KUMAGAYA),
        description: Some(l(
            "スライダーを動かして施工前後を比較できます。",
            "Drag the slider to compare before and after.",
        )),
    },
    WorkItem::Single {
        image: "works/Interior_coordinator.jpg",
        title: l("インテリアコーディネートの事例", "Interior coordination examples"),
        location: None,
        description: None,
    },
];

pub const LOGO: &str = "works/logo.png";
pub const HERO_IMAGE: &str = "works/work2.jpg";
pub const FOUNDER_IMAGE: &str = "works/IMG_8614_1.jpg";

pub struct CompanyRow {
    pub term: Localized,
    pub value: Localized,
}

/// Rows whose value is the same in both languages repeat it on each side.
pub const COMPANY: &[CompanyRow] = &[
    CompanyRow {
        term: l("会社名", "Name"),
        value: l("株式会社TigerWorks", "株式会社TigerWorks"),
    },
    CompanyRow {
        term: l("設立日", "Established"),
        value: l("2025年6月4日", "2025年6月4日"),
    },
    CompanyRow {
        term: l("代表者", "Representative"),
        value: l("池田 健虎", "池田 健虎"),
    },
    CompanyRow {
        term: l("所在地", "Address"),
        value: l("〒196-0033 東京都昭島市福島町908-33", "〒196-0033 東京都昭島市福島町908-33"),
    },
    CompanyRow { term: l("資本金", "Capital"), value: l("480万円", "480万円") },
    CompanyRow {
        term: l("事業内容", "Business"),
        value: l(
            "不動産賃貸業／リノベーション／簡易宿所運営",
            "Real estate leasing / Renovation / Guesthouse ops",
        ),
    },
];

pub const ETHOS: &[Localized] = &[
    l(
        "代表が現場に入り、意思決定から施工まで一貫",
        "Founder-led, hands-on from decision to build",
    ),
    l("DIYと専門工事の最適配分でコスト最適化", "Optimize cost via DIY + pro mix"),
    l(
        "行政・金融機関・地域との調整力",
        "Coordination with authorities, banks, community",
    ),
    l(
        "和室を単に洋室化せず、木部・建具・左官など既存素材を活かす設計",
        "Material-first design: rather than simply converting tatami rooms to Western style, we reuse and restore original timber, fittings, and plaster.",
    ),
];

pub const MESSAGE: Localized = l(
    "私は佐賀県伊万里市出身で、男5人兄弟の4男として育ちました。私が生まれる5年前に建てられた実家は、今も手入れが行き届き自慢の家です。だからこそ、古い家も手をかければ、かつての美しさと新しい使いやすさを取り戻せると信じています。いま日本各地で空き家が増える中、古民家の良さを活かし、次の世代へ引き継げる住まいへ再生していきます。",
    "I’m from Imari City in Saga Prefecture, the fourth of five brothers, and I grew up in this house. Our family home was built five years before I was born and is still carefully maintained—a home I’m proud of. That is why I believe older houses, when cared for, can regain their former beauty while becoming easier to live in. As vacant homes increase across Japan, I want to bring out the best of traditional houses and restore them into homes that can be passed on to the next generation.",
);

pub const SIGNATURE: Localized = l(
    "代表取締役　池田 健虎",
    "Taketo Ikeda, Representative Director",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_covers_every_section_anchor() {
        let ids: Vec<_> = NAV.iter().map(|n| n.id).collect();
        assert_eq!(ids, ["top", "services", "works", "company", "message", "contact"]);
    }

    #[test]
    fn works_list_is_non_empty() {
        assert!(!WORKS.is_empty());
    }

    #[test]
    fn asset_paths_are_relative() {
        let mut paths = vec![LOGO, HERO_IMAGE, FOUNDER_IMAGE];
        for work in WORKS {
            match work {
                WorkItem::Single { image, .. } => paths.push(*image),
                WorkItem::Comparison { before, after, .. } => paths.extend([*before, *after]),
            }
        }
        for path in paths {
            assert!(!path.starts_with('/') && !path.contains("://"), "{path}");
        }
    }

    #[test]
    fn accessors_see_through_both_variants() {
        let comparison = WORKS
            .iter()
            .find(|w| matches!(w, WorkItem::Comparison { .. }))
            .expect("gallery has a comparison");
        assert_eq!(comparison.title().en, "Kitchen Renovation");
        assert!(comparison.location().is_some());
        assert!(WORKS[3].location().is_none());
    }
}
