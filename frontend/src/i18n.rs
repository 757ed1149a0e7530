use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    /// Picks the Japanese or English member of a parallel pair.
    pub fn translate<'a>(self, ja: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Ja => ja,
            Language::En => en,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Ja => "JA",
            Language::En => "EN",
        }
    }
}

/// A string authored in both languages. Both halves always travel together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub ja: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(ja: &'static str, en: &'static str) -> Self {
        Self { ja, en }
    }

    pub fn get(&self, language: Language) -> &'static str {
        language.translate(self.ja, self.en)
    }
}

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn t<'a>(&self, ja: &'a str, en: &'a str) -> &'a str {
        self.language.translate(ja, en)
    }

    pub fn text(&self, localized: &Localized) -> &'static str {
        localized.get(self.language)
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self {
            language: Language::default(),
            set_language: Callback::noop(),
        }
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    #[prop_or(true)]
    pub separator: bool,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let lang = use_language();

    let button = |target: Language| {
        let set_language = lang.set_language.clone();
        let onclick = Callback::from(move |_: MouseEvent| set_language.emit(target));
        let state = if lang.language == target {
            "bg-neutral-900 text-white"
        } else {
            "hover:bg-neutral-100"
        };
        html! {
            <button {onclick} class={classes!("text-sm", "px-2", "py-1", "rounded", state)}>
                {target.label()}
            </button>
        }
    };

    html! {
        <>
            {button(Language::Ja)}
            if props.separator {
                <span class="text-neutral-300">{"|"}</span>
            }
            {button(Language::En)}
        </>
    }
}
