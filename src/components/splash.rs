use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SplashProps {
    pub on_complete: Callback<()>,
}

/// Full-screen loading splash. Holds the brand mark for a fixed delay and
/// then fires `on_complete` exactly once. The pending timeout is owned by
/// the mount effect, so unmounting early drops (and thereby cancels) it
/// before the callback can fire.
#[function_component(Splash)]
pub fn splash(props: &SplashProps) -> Html {
    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::SPLASH_DURATION_MS, move || {
                    on_complete.emit(());
                });
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="splash">
            <div class="splash-mark">
                <div class="splash-wordmark">{"KOMOREBI"}</div>
                <div class="splash-rule"></div>
                <div class="splash-tagline">{"Tokyo Specialty Coffee"}</div>
            </div>
            <style>
                {r#"
                    .splash {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: #1c1917;
                        color: #fff;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }

                    .splash-mark {
                        text-align: center;
                        animation: splash-in 1s ease-out both;
                    }

                    @keyframes splash-in {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }

                    .splash-wordmark {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 3.5rem;
                        font-weight: bold;
                        letter-spacing: 0.25em;
                        margin-bottom: 1rem;
                    }

                    .splash-rule {
                        width: 4rem;
                        height: 1px;
                        background: #dc2626;
                        margin: 0 auto 1rem auto;
                    }

                    .splash-tagline {
                        font-size: 0.7rem;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        color: #a8a29e;
                    }

                    @media (max-width: 768px) {
                        .splash-wordmark {
                            font-size: 2.2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
