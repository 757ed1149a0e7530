use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::comparison_slider::ComparisonSlider;
use crate::components::dom;
use crate::components::lightbox::{use_viewer, Lightbox, ViewerAction, ViewerState};
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{self, WorkItem, COMPANY, ETHOS, NAV, SERVICES, WORKS};
use crate::i18n::{use_language, Language, LanguageContext, LanguageToggle};

/// Owns the page-wide state and hands it down: the current language through
/// context, the viewer handle through props.
#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_state(Language::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Keep <html lang> in step with the toggle
    {
        use_effect_with_deps(
            move |lang: &Language| {
                let tag = lang.tag();
                match dom::document_root() {
                    Ok(root) => {
                        if let Err(e) = root.set_attribute("lang", tag) {
                            log::warn!("Failed to set document language: {:?}", e);
                        }
                    }
                    Err(e) => log::warn!("Failed to set document language: {}", e),
                }
                || ()
            },
            *language,
        );
    }

    let context = LanguageContext {
        language: *language,
        set_language: {
            let language = language.clone();
            Callback::from(move |next: Language| {
                log::debug!("Switching language to {}", next.tag());
                language.set(next);
            })
        },
    };

    html! {
        <ContextProvider<LanguageContext> {context}>
            <div class="min-h-screen bg-white text-neutral-900">
                <SiteHeader />
                <Hero />
                <Services />
                <Works />
                <Company />
                <Message />
                <Contact />
                <SiteFooter />
            </div>
        </ContextProvider<LanguageContext>>
    }
}

fn close_enclosing_menu(e: MouseEvent) {
    let menu = e
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("details").ok().flatten());
    if let Some(menu) = menu {
        if let Err(e) = menu.remove_attribute("open") {
            log::warn!("Failed to close menu: {:?}", e);
        }
    }
}

#[function_component(SiteHeader)]
fn site_header() -> Html {
    let lang = use_language();
    let desktop_links = NAV.iter().map(|n| {
        html! {
            <a key={n.id} href={format!("#{}", n.id)} class="text-sm hover:opacity-70">
                {lang.text(&n.label)}
            </a>
        }
    });
    let mobile_links = NAV.iter().map(|n| {
        html! {
            <a key={n.id} href={format!("#{}", n.id)} class="text-sm" onclick={Callback::from(close_enclosing_menu)}>
                {lang.text(&n.label)}
            </a>
        }
    });

    html! {
        <header class="sticky top-0 z-50 backdrop-blur bg-white/80 border-b border-neutral-100">
            <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
                <a href="#top" class="flex items-center gap-3">
                    <img
                        src={config::asset_url(content::LOGO)}
                        alt={lang.t("TigerWorksロゴ", "TigerWorks logo")}
                        class="w-9 h-9 rounded-md object-contain"
                    />
                    <span class="font-semibold">{"TigerWorks Inc."}</span>
                </a>
                <nav class="hidden md:flex items-center gap-6">
                    { for desktop_links }
                    <div class="flex items-center gap-2">
                        <LanguageToggle />
                    </div>
                </nav>
                <details class="md:hidden">
                    <summary class="cursor-pointer text-sm">{"Menu"}</summary>
                    <div class="absolute right-4 mt-2 bg-white shadow-xl rounded-2xl p-4 flex flex-col gap-3">
                        { for mobile_links }
                        <div class="flex items-center gap-2 pt-2 border-t">
                            <LanguageToggle separator={false} />
                        </div>
                    </div>
                </details>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let lang = use_language();
    html! {
        <section id="top" class="relative">
            <div class="absolute inset-0 bg-gradient-to-b from-neutral-100 to-white"></div>
            <div class="max-w-6xl mx-auto px-4 py-20 sm:py-28 relative">
                <div class="grid md:grid-cols-2 gap-10 items-center">
                    <div>
                        <h1 class="text-4xl sm:text-5xl font-bold leading-tight">
                            {lang.t("古民家・賃貸を“手で”再生する", "Hands‑on revival of traditional homes & rentals")}
                        </h1>
                        <p class="mt-4 text-neutral-600">
                            {lang.t(
                                "株式会社TigerWorksは、築古不動産の再生、賃貸運営、簡易宿所（民泊）企画をワンストップで提供します。代表自ら施工・設計・運営まで関わり、地域に根ざした価値創出を行います。",
                                "TigerWorks provides one‑stop services for aged‑property renovation, rental operations, and guesthouse (minpaku) planning. The founder is directly involved—from design and build to operations—creating value rooted in the local community.",
                            )}
                        </p>
                        <div class="mt-6 flex flex-wrap gap-3">
                            <a href="#services" class="px-5 py-3 rounded-2xl bg-neutral-900 text-white text-sm font-medium hover:opacity-90">
                                {lang.t("事業内容", "Our Services")}
                            </a>
                            <a href="#contact" class="px-5 py-3 rounded-2xl border text-sm font-medium hover:bg-neutral-50">
                                {lang.t("相談する", "Contact us")}
                            </a>
                        </div>
                        <div class="mt-6 text-xs text-neutral-500">
                            {lang.t(
                                "拠点：東京都昭島市 / 対応エリア：多摩・西東京・埼玉・神奈川",
                                "Base: Akishima, Tokyo / Service area: West Tokyo, Tama, Saitama, Kanagawa",
                            )}
                        </div>
                    </div>
                    <div class="aspect-[4/3] rounded-3xl shadow-sm bg-neutral-200 overflow-hidden">
                        <img src={config::asset_url(content::HERO_IMAGE)} alt="Renovated interior" class="w-full h-full object-cover" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let lang = use_language();
    let cards = SERVICES.iter().enumerate().map(|(i, s)| {
        html! {
            <Reveal key={i} delay={i as u32 * 100}>
                <div class="h-full rounded-2xl bg-white p-6 shadow-sm border border-neutral-100">
                    <h3 class="font-semibold">{lang.text(&s.title)}</h3>
                    <p class="text-sm text-neutral-600 mt-2">{lang.text(&s.description)}</p>
                </div>
            </Reveal>
        }
    });

    html! {
        <section id="services" class="py-16 sm:py-20 bg-neutral-50 border-t border-neutral-100">
            <div class="max-w-6xl mx-auto px-4">
                <Reveal>
                    <h2 class="text-2xl sm:text-3xl font-bold">{lang.t("Service / 事業内容", "Service")}</h2>
                    <p class="mt-2 text-neutral-600 text-sm">
                        {lang.t("小規模でも品質重視で確実に。現場主義でスピーディに対応します。", "Small scale, high quality. Fast, on-site execution.")}
                    </p>
                </Reveal>
                <div class="mt-8 grid md:grid-cols-2 lg:grid-cols-4 gap-5">
                    { for cards }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct WorkCardProps {
    index: usize,
    item: &'static WorkItem,
    viewer: UseReducerHandle<ViewerState>,
}

#[function_component(WorkCard)]
fn work_card(props: &WorkCardProps) -> Html {
    let lang = use_language();
    let title = lang.text(props.item.title());
    let open = {
        let viewer = props.viewer.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| viewer.dispatch(ViewerAction::Open(index)))
    };
    let caption_details = html! {
        <>
            <div class="font-medium">{title}</div>
            if let Some(location) = props.item.location() {
                <div class="text-neutral-600">{lang.text(location)}</div>
            }
        </>
    };

    match props.item {
        WorkItem::Single { image, .. } => html! {
            <figure
                class="group rounded-2xl overflow-hidden border border-neutral-100 shadow-sm cursor-zoom-in"
                onclick={open}
            >
                <img
                    src={config::asset_url(image)}
                    alt={title}
                    class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-[1.03]"
                    loading="lazy"
                    decoding="async"
                />
                <figcaption class="p-4 text-sm bg-white">{caption_details}</figcaption>
            </figure>
        },
        WorkItem::Comparison { before, after, .. } => html! {
            <figure class="rounded-2xl overflow-hidden border border-neutral-100 shadow-sm">
                <ComparisonSlider
                    before={config::asset_url(before)}
                    after={config::asset_url(after)}
                    label={title}
                    class="w-full h-48"
                />
                <figcaption class="p-4 text-sm bg-white flex items-start gap-3">
                    <div class="grow">{caption_details}</div>
                    <button onclick={open} class="shrink-0 text-xs px-2 py-1 rounded-lg border hover:bg-neutral-50">
                        {lang.t("拡大表示", "View larger")}
                    </button>
                </figcaption>
            </figure>
        },
    }
}

#[function_component(Works)]
fn works() -> Html {
    let lang = use_language();
    let viewer = use_viewer(WORKS.len());
    let cards = WORKS.iter().enumerate().map(|(i, item)| {
        html! {
            <Reveal key={i} delay={i as u32 * 100}>
                <WorkCard index={i} {item} viewer={viewer.clone()} />
            </Reveal>
        }
    });

    html! {
        <section id="works" class="py-16 sm:py-20">
            <div class="max-w-6xl mx-auto px-4">
                <Reveal>
                    <h2 class="text-2xl sm:text-3xl font-bold">{lang.t("Works / 実績", "Works")}</h2>
                    <p class="mt-2 text-neutral-600 text-sm">
                        {lang.t(
                            "DIY＋プロ施工のハイブリッド事例。民泊化・賃貸リノベの写真を掲載予定。",
                            "Hybrid DIY & pro projects. Guesthouse and rental renovations.",
                        )}
                    </p>
                </Reveal>
                <div class="mt-8 grid sm:grid-cols-2 lg:grid-cols-3 gap-5">
                    { for cards }
                </div>
                <Lightbox items={WORKS} viewer={viewer.clone()} />
            </div>
        </section>
    }
}

#[function_component(Company)]
fn company() -> Html {
    let lang = use_language();
    let rows = COMPANY.iter().map(|row| {
        html! {
            <>
                <dt class="text-neutral-500">{lang.text(&row.term)}</dt>
                <dd>{lang.text(&row.value)}</dd>
            </>
        }
    });
    let ethos = ETHOS.iter().map(|line| html! { <li>{lang.text(line)}</li> });

    html! {
        <section id="company" class="py-16 sm:py-20 bg-neutral-50 border-y border-neutral-100">
            <div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-10 items-start">
                <Reveal>
                    <h2 class="text-2xl sm:text-3xl font-bold">{lang.t("Company / 会社概要", "Company")}</h2>
                    <dl class="mt-6 text-sm grid grid-cols-[auto,1fr] gap-x-6 gap-y-3">
                        { for rows }
                    </dl>
                </Reveal>
                <Reveal delay={150}>
                    <div class="rounded-3xl bg-white p-6 border border-neutral-100 shadow-sm">
                        <h3 class="font-semibold">{lang.t("こだわり", "Our ethos")}</h3>
                        <ul class="mt-3 text-sm list-disc pl-5 space-y-2 text-neutral-700">
                            { for ethos }
                        </ul>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Message)]
fn message() -> Html {
    let lang = use_language();
    html! {
        <section id="message" class="py-16 sm:py-20">
            <div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-10 items-center">
                <Reveal>
                    <div class="aspect-[4/3] rounded-3xl overflow-hidden bg-neutral-200">
                        <img src={config::asset_url(content::FOUNDER_IMAGE)} alt="Founder" class="w-full h-full object-cover" />
                    </div>
                </Reveal>
                <Reveal delay={150}>
                    <h2 class="text-2xl sm:text-3xl font-bold">{lang.t("Message / 代表挨拶", "Message")}</h2>
                    <p class="mt-4 text-neutral-700 text-sm leading-7">{lang.text(&content::MESSAGE)}</p>
                    <div class="mt-4 text-sm text-neutral-700 italic">{lang.text(&content::SIGNATURE)}</div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let lang = use_language();
    html! {
        <section id="contact" class="py-16 sm:py-20 bg-neutral-50 border-t border-neutral-100">
            <div class="max-w-6xl mx-auto px-4">
                <Reveal>
                    <h2 class="text-2xl sm:text-3xl font-bold">{lang.t("Contact / お問い合わせ", "Contact")}</h2>
                    <div class="mt-6">
                        <p class="text-sm text-neutral-600 mb-4">
                            {lang.t("お問い合わせは下記フォームよりお願いいたします。", "Please contact us via the form below. Phone number is private.")}
                        </p>
                        <div class="rounded-3xl bg-white p-2 shadow-sm border border-neutral-100 overflow-hidden">
                            <iframe
                                title="contact-form"
                                src={config::CONTACT_FORM_URL}
                                sandbox="allow-scripts allow-forms allow-same-origin allow-popups"
                                class="w-full"
                                style={format!("height: {}px;", config::CONTACT_FORM_HEIGHT)}
                            ></iframe>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="py-10 text-sm text-neutral-500">
            <div class="max-w-6xl mx-auto px-4 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div>{format!("© {} TigerWorks Inc.", year)}</div>
                <div class="flex items-center gap-3">
                    <a href="#" class="hover:opacity-70">{"Privacy"}</a>
                    <span>{"·"}</span>
                    <a href="#" class="hover:opacity-70">{"Terms"}</a>
                </div>
            </div>
        </footer>
    }
}
