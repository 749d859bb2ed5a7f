use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::icons::{CheckIcon, CloseIcon, ExternalLinkIcon};
use crate::modal::ProjectModal;

#[component]
pub fn ProjectModalView(state: RwSignal<ProjectModal>) -> impl IntoView {
    let close = move |_: MouseEvent| state.update(|m| m.close());

    // Memoised so the reveal flip only retouches the image class instead of
    // remounting the modal mid-transition.
    let visible = Memo::new(move |_| state.get().visible());

    move || {
        visible.get().map(|project| {
            let image_class = move || {
                if state.get().image_revealed() {
                    "modal__image modal__image--revealed"
                } else {
                    "modal__image"
                }
            };

            view! {
                <div class="modal-backdrop" on:click=close>
                    <div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
                        <button class="modal__close" aria-label="إغلاق" on:click=close>
                            <CloseIcon/>
                        </button>

                        <div class="modal__layout">
                            <div class="modal__media">
                                <img class=image_class src=project.image alt=project.title/>
                            </div>

                            <div class="modal__content">
                                <h2>{project.title}</h2>
                                <div class="rule"></div>
                                <p class="modal__description">{project.full_description}</p>

                                <h3>"ما قمنا بتنفيذه:"</h3>
                                <ul class="modal__features">
                                    {project
                                        .features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <li>
                                                    <CheckIcon/>
                                                    <span>{*feature}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>

                                <a
                                    class="btn btn--gold modal__website"
                                    href=project.website
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <ExternalLinkIcon/>
                                    "زيارة الموقع"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
