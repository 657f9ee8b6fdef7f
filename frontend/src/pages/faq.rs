use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        id: "como-funciona",
        question: "Como funciona a consultoria?",
        answer: "Começamos com um diagnóstico gratuito do seu negócio. A partir dele, \
                 montamos um plano de ação com metas claras e acompanhamos a execução \
                 junto com a sua equipe.",
    },
    FaqEntry {
        id: "prazo-resposta",
        question: "Em quanto tempo recebo uma resposta?",
        answer: "Respondemos todas as mensagens pelo WhatsApp em até um dia útil.",
    },
    FaqEntry {
        id: "porte-empresa",
        question: "Vocês atendem empresas de qualquer porte?",
        answer: "Sim. Atendemos desde microempreendedores até empresas de médio porte, \
                 adaptando o escopo ao momento de cada negócio.",
    },
    FaqEntry {
        id: "atendimento-remoto",
        question: "O atendimento pode ser remoto?",
        answer: "Pode. As reuniões acontecem por videochamada, e visitas presenciais \
                 são combinadas conforme a necessidade do projeto.",
    },
    FaqEntry {
        id: "valores",
        question: "Quanto custa?",
        answer: "O valor depende do escopo definido no diagnóstico. Enviamos uma \
                 proposta detalhada antes de qualquer compromisso.",
    },
];

/// Expanded flags, one per FAQ item. At most one is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    expanded: Vec<bool>,
}

pub enum FaqAction {
    Toggle(usize),
    Open(usize),
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self { expanded: vec![false; len] }
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded.iter().position(|open| *open)
    }

    /// Collapses every other item and flips `index`.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.expanded.len() {
            return;
        }
        let was_open = self.expanded[index];
        self.expanded.iter_mut().for_each(|open| *open = false);
        self.expanded[index] = !was_open;
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.expanded.len() {
            return;
        }
        self.expanded.iter_mut().for_each(|open| *open = false);
        self.expanded[index] = true;
    }
}

impl Reducible for FaqAccordion {
    type Action = FaqAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut accordion = (*self).clone();
        match action {
            FaqAction::Toggle(index) => accordion.toggle(index),
            FaqAction::Open(index) => accordion.open(index),
        }
        Rc::new(accordion)
    }
}

/// Index of the entry a `#hash` points at, if any.
pub fn entry_for_hash(entries: &[FaqEntry], hash: &str) -> Option<usize> {
    let id = hash.strip_prefix('#')?;
    entries.iter().position(|entry| entry.id == id)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: &'static str,
    question: &'static str,
    answer: &'static str,
    expanded: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };
    html! {
        <div id={props.id} class={classes!("faq-item", props.expanded.then_some("active"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={props.expanded.to_string()}
            >
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.expanded { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_reducer(|| FaqAccordion::new(FAQ_ENTRIES.len()));

    // Open the item named by the URL hash, on mount and on every hashchange
    {
        let accordion = accordion.clone();
        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let Ok(hash) = window.location().hash() else {
                        return;
                    };
                    if let Some(index) = entry_for_hash(FAQ_ENTRIES, &hash) {
                        accordion.dispatch(FaqAction::Open(index));
                        // Give the answer a moment to expand before scrolling
                        let id = FAQ_ENTRIES[index].id;
                        Timeout::new(100, move || {
                            if let Some(element) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|doc| doc.get_element_by_id(id))
                            {
                                element.scroll_into_view_with_bool(true);
                            }
                        })
                        .forget();
                    }
                };

                check_hash();

                let listener = Closure::<dyn Fn()>::new(check_hash);
                let window = web_sys::window();
                match &window {
                    Some(window) => {
                        if let Err(e) = window.add_event_listener_with_callback(
                            "hashchange",
                            listener.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Could not watch hashchange: {:?}", e);
                        }
                    }
                    None => log::warn!("No window available, FAQ deep links disabled"),
                }

                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "hashchange",
                            listener.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Could not stop watching hashchange: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let open = accordion.expanded_index();

    html! {
        <section class="faq-section">
            <h2>{"Perguntas Frequentes"}</h2>
            { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_| accordion.dispatch(FaqAction::Toggle(index)))
                };
                html! {
                    <FaqItem
                        key={entry.id}
                        id={entry.id}
                        question={entry.question}
                        answer={entry.answer}
                        expanded={open == Some(index)}
                        {on_toggle}
                    />
                }
            }) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(accordion: &FaqAccordion) -> usize {
        accordion.expanded.iter().filter(|open| **open).count()
    }

    #[test]
    fn opening_one_item_closes_the_other() {
        let mut accordion = FaqAccordion::new(3);
        accordion.toggle(0);
        assert_eq!(accordion.expanded_index(), Some(0));

        accordion.toggle(1);
        assert_eq!(accordion.expanded_index(), Some(1));
        assert_eq!(open_count(&accordion), 1);
    }

    #[test]
    fn toggling_open_item_leaves_none_open() {
        let mut accordion = FaqAccordion::new(3);
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion.expanded_index(), None);
    }

    #[test]
    fn open_is_idempotent_and_exclusive() {
        let mut accordion = FaqAccordion::new(3);
        accordion.toggle(2);
        accordion.open(0);
        accordion.open(0);
        assert_eq!(accordion.expanded_index(), Some(0));
        assert_eq!(open_count(&accordion), 1);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut accordion = FaqAccordion::new(2);
        accordion.toggle(0);
        accordion.toggle(5);
        accordion.open(9);
        assert_eq!(accordion.expanded_index(), Some(0));
        assert_eq!(open_count(&accordion), 1);
    }

    #[test]
    fn hash_lookup() {
        assert_eq!(entry_for_hash(FAQ_ENTRIES, "#prazo-resposta"), Some(1));
        assert_eq!(entry_for_hash(FAQ_ENTRIES, "prazo-resposta"), None);
        assert_eq!(entry_for_hash(FAQ_ENTRIES, "#nada"), None);
        assert_eq!(entry_for_hash(FAQ_ENTRIES, ""), None);
    }
}
