use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod motion;
mod hooks {
    pub mod scroll;
    pub mod visibility;
}
mod components {
    pub mod marquee;
    pub mod splash;
}
mod pages {
    pub mod landing;
}

use components::splash::Splash;
use hooks::scroll::use_scroll_y;
use motion::MenuState;
use pages::landing::Landing;

const NAV_ANCHORS: [(&str, &str); 4] = [
    ("#about", "ABOUT"),
    ("#signature", "SIGNATURE"),
    ("#menu", "MENU"),
    ("#locations", "LOCATIONS"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let offset_y = use_scroll_y();
    let scrolled = motion::is_scrolled(offset_y);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    // No prevent_default here: the default anchor jump is the navigation.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    let overlay_class = if menu.open {
        "nav-overlay nav-overlay-open"
    } else {
        "nav-overlay"
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-wordmark">{"KOMOREBI"}</span>
                    <span class="nav-dot"></span>
                </a>

                <div class="nav-links">
                    { NAV_ANCHORS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" key={*href}>{*label}</a>
                    }).collect::<Html>() }
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={overlay_class}>
                { NAV_ANCHORS.iter().map(|(href, label)| html! {
                    <a
                        href={*href}
                        class="nav-overlay-link"
                        onclick={close_menu.clone()}
                        key={*href}
                    >
                        {*label}
                    </a>
                }).collect::<Html>() }
                <div class="nav-overlay-footer">{"TOKYO ・ EST 2024"}</div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 2rem 0;
                        color: #fff;
                        background: transparent;
                        transition: all 0.5s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        padding: 1rem 0;
                        color: #1c1917;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }

                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        color: inherit;
                    }

                    .nav-wordmark {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 1.5rem;
                        font-weight: bold;
                        letter-spacing: 0.25em;
                    }

                    .nav-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #dc2626;
                        transition: transform 0.3s ease;
                    }

                    .nav-logo:hover .nav-dot {
                        transform: scale(1.5);
                    }

                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 3rem;
                        font-size: 0.7rem;
                        letter-spacing: 0.2em;
                        font-weight: 500;
                    }

                    @media (min-width: 769px) {
                        .nav-links {
                            display: flex;
                        }
                    }

                    .nav-link {
                        color: inherit;
                        text-decoration: none;
                        position: relative;
                        transition: color 0.3s ease;
                    }

                    .nav-link::after {
                        content: '';
                        position: absolute;
                        bottom: -0.5rem;
                        left: 0;
                        width: 0;
                        height: 1px;
                        background: #dc2626;
                        transition: width 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #dc2626;
                    }

                    .nav-link:hover::after {
                        width: 100%;
                    }

                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        z-index: 60;
                        position: relative;
                        padding: 0.25rem;
                    }

                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: currentColor;
                    }

                    @media (min-width: 769px) {
                        .burger-menu {
                            display: none;
                        }
                    }

                    .nav-overlay {
                        position: fixed;
                        inset: 0;
                        background: #fafaf9;
                        z-index: 40;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        gap: 2rem;
                        transform: translateX(100%);
                        transition: transform 0.5s cubic-bezier(0, 0.55, 0.45, 1);
                    }

                    .nav-overlay-open {
                        transform: translateX(0);
                    }

                    @media (min-width: 769px) {
                        .nav-overlay {
                            display: none;
                        }
                    }

                    .nav-overlay-link {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 1.8rem;
                        color: #1c1917;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .nav-overlay-link:hover {
                        color: #dc2626;
                    }

                    .nav-overlay-footer {
                        position: absolute;
                        bottom: 3rem;
                        font-size: 0.7rem;
                        letter-spacing: 0.25em;
                        color: #a8a29e;
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let loading = use_state(|| true);

    let on_splash_complete = {
        let loading = loading.clone();
        Callback::from(move |_| {
            // one-way gate: nothing ever sets this back to true
            if *loading {
                info!("Splash complete, mounting page");
                loading.set(false);
            }
        })
    };

    html! {
        <div class="app-root">
            {
                if *loading {
                    html! { <Splash on_complete={on_splash_complete} /> }
                } else {
                    html! {
                        <div class="page-enter">
                            <Nav />
                            <Landing />
                        </div>
                    }
                }
            }
            <style>
                {r#"
                    .page-enter {
                        animation: page-fade 1s ease both;
                    }

                    @keyframes page-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
