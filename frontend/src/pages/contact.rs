use yew::prelude::*;

use crate::contact::form::ContactForm;
use crate::contact::newsletter::NewsletterForm;
use crate::contact::notice::{use_notice_board, FormKind};
use crate::pages::faq::FaqSection;
use crate::pages::services::{ConsultationCta, ServiceList};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let (notices, show_notice) = use_notice_board();

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

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Fale com a Júco Consultoria"}</h1>
                <p>{"Preencha o formulário e continue a conversa direto no WhatsApp."}</p>
            </section>

            <section class="contact-section">
                <ContactForm
                    notice={notices.for_form(FormKind::Contact).cloned()}
                    on_notice={show_notice.clone()}
                />
            </section>

            <ServiceList />
            <FaqSection />
            <ConsultationCta />

            <NewsletterForm
                notice={notices.for_form(FormKind::Newsletter).cloned()}
                on_notice={show_notice}
            />

            <style>
                {r#"
                .contact-page {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 2rem 1rem 4rem;
                    font-family: system-ui, sans-serif;
                    color: #1f2933;
                }

                .contact-hero {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }

                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.6rem 0.8rem;
                    border: 1px solid #cbd2d9;
                    border-radius: 6px;
                    font-size: 1rem;
                }

                .form-group .input-error {
                    border-color: #dc3545;
                }

                .field-error {
                    color: #dc3545;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }

                .required {
                    color: #dc3545;
                }

                .checkbox-group label {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .form-message {
                    padding: 1rem;
                    border-radius: 8px;
                    margin-bottom: 1.5rem;
                    text-align: center;
                    font-weight: 600;
                }

                .form-message.success {
                    background-color: #d4edda;
                    color: #155724;
                    border: 1px solid #c3e6cb;
                }

                .form-message.error {
                    background-color: #f8d7da;
                    color: #721c24;
                    border: 1px solid #f5c6cb;
                }

                .submit-button,
                .cta-button,
                .service-button,
                .newsletter-form button {
                    background: #25d366;
                    color: #ffffff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.75rem 1.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1rem;
                }

                .service-card {
                    border: 1px solid #e4e7eb;
                    border-radius: 8px;
                    padding: 1rem;
                }

                .faq-item {
                    border-bottom: 1px solid #e4e7eb;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    padding: 1rem 0;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }

                .faq-item.active .faq-answer {
                    max-height: 500px;
                }

                .consultation-cta,
                .newsletter {
                    margin-top: 3rem;
                    text-align: center;
                }

                .consultation-context {
                    width: 100%;
                    margin-bottom: 1rem;
                }

                .newsletter-form {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .newsletter-form .form-message {
                    flex-basis: 100%;
                }
                "#}
            </style>
        </div>
    }
}
