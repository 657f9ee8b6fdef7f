use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::utils::whatsapp::{open_chat, Composer};

pub struct Service {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        name: "Planejamento Estratégico",
        summary: "Metas, indicadores e um plano de ação para os próximos anos.",
    },
    Service {
        name: "Gestão Financeira",
        summary: "Fluxo de caixa, precificação e controle de custos.",
    },
    Service {
        name: "Processos e Operações",
        summary: "Mapeamento e melhoria dos processos do dia a dia.",
    },
    Service {
        name: "Marketing e Vendas",
        summary: "Posicionamento, funil comercial e captação de clientes.",
    },
];

#[function_component]
pub fn ServiceList() -> Html {
    let composer = use_context::<Composer>().unwrap_or_default();

    html! {
        <section class="services">
            <h2>{"Nossos Serviços"}</h2>
            <div class="service-grid">
                { for SERVICES.iter().map(|service| {
                    let onclick = {
                        let composer = composer.clone();
                        let name = service.name;
                        Callback::from(move |_: MouseEvent| {
                            open_chat(&composer.service_inquiry_link(name));
                        })
                    };
                    html! {
                        <div class="service-card" key={service.name}>
                            <h3>{service.name}</h3>
                            <p>{service.summary}</p>
                            <button class="service-button" {onclick}>{"Tenho interesse"}</button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

/// "Agende uma consultoria" call to action with an optional context note.
#[function_component]
pub fn ConsultationCta() -> Html {
    let composer = use_context::<Composer>().unwrap_or_default();
    let context = use_state(String::new);

    let oninput = {
        let context = context.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            context.set(textarea.value());
        })
    };

    let onclick = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| {
            let note = context.trim();
            open_chat(&composer.consultation_link(Some(note)));
        })
    };

    html! {
        <section class="consultation-cta">
            <h2>{"Agende uma consultoria estratégica"}</h2>
            <p>
                {"A primeira conversa é gratuita. Se quiser, conte um pouco sobre o seu momento."}
            </p>
            <textarea
                class="consultation-context"
                rows="3"
                placeholder="Contexto (opcional)"
                value={(*context).clone()}
                {oninput}
            />
            <button class="cta-button" {onclick}>{"Agendar pelo WhatsApp"}</button>
        </section>
    }
}
