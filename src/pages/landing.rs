use yew::prelude::*;

use crate::components::marquee::Marquee;
use crate::hooks::scroll::use_scroll_y;
use crate::hooks::visibility::use_reveal;
use crate::motion;

/// Static menu content. Fixed order, fixed size; the grid renders exactly
/// this sequence with no filtering or sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub image_ref: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        title: "Hand Drip Blend",
        price: "¥650",
        description: "Notes of dark chocolate and cherry.",
        image_ref: "https://picsum.photos/seed/drip/600/800",
    },
    MenuItem {
        title: "Matcha Latte",
        price: "¥700",
        description: "Ceremonial grade matcha from Uji.",
        image_ref: "https://picsum.photos/seed/matchalatte/600/800",
    },
    MenuItem {
        title: "Cold Brew",
        price: "¥600",
        description: "Slow steeped for 24 hours.",
        image_ref: "https://picsum.photos/seed/cold/600/800",
    },
    MenuItem {
        title: "Espresso Tonic",
        price: "¥750",
        description: "Refreshing citrus notes.",
        image_ref: "https://picsum.photos/seed/espressotonic/600/800",
    },
    MenuItem {
        title: "Basque Cake",
        price: "¥650",
        description: "Rich, creamy, and caramelized.",
        image_ref: "https://picsum.photos/seed/basque/600/800",
    },
    MenuItem {
        title: "Seasonal Tart",
        price: "¥750",
        description: "Fresh seasonal fruits with custard.",
        image_ref: "https://picsum.photos/seed/tart/600/800",
    },
];

#[function_component(Hero)]
fn hero() -> Html {
    let offset_y = use_scroll_y();

    // Background drifts at half speed while the copy fades out over the
    // first 300px. Both hold their endpoint outside the mapped range.
    let background_style = format!(
        "transform: translate3d(0, {}px, 0);",
        motion::parallax_shift(offset_y)
    );
    let copy_style = format!("opacity: {};", motion::hero_opacity(offset_y));

    html! {
        <section class="hero">
            <div class="hero-background" style={background_style}>
                <div class="hero-shade"></div>
                <img
                    src="https://picsum.photos/seed/pour/1920/1080"
                    alt="Coffee pour"
                    referrerpolicy="no-referrer"
                />
            </div>
            <div class="hero-content" style={copy_style}>
                <div class="hero-est">{"EST. 2024"}</div>
                <h1 class="hero-title">{"KOMOREBI"}</h1>
                <p class="hero-subtitle">
                    {"Sunlight filtering through the trees."}<br/>
                    {"A moment of calm in the heart of Tokyo."}
                </p>
                <a href="#menu" class="hero-cta">{"DISCOVER MENU"}</a>
            </div>
            <div class="hero-scroll-cue">
                <span>{"SCROLL"}</span>
                <div class="hero-scroll-line"></div>
            </div>
        </section>
    }
}

#[function_component(Philosophy)]
fn philosophy() -> Html {
    let (photo_ref, photo_in) = use_reveal();
    let (copy_ref, copy_in) = use_reveal();

    html! {
        <section id="about" class="philosophy">
            <div class="section-inner">
                <div class="philosophy-glyph">{"和"}</div>
                <div class="philosophy-columns">
                    <div class="philosophy-photo-wrap">
                        <div
                            ref={photo_ref}
                            class={classes!("philosophy-photo", "reveal-scale", photo_in.then(|| "revealed"))}
                        >
                            <img
                                src="https://picsum.photos/seed/japanesecafe/900/1200"
                                alt="Interior"
                                referrerpolicy="no-referrer"
                            />
                        </div>
                        <div class="philosophy-accent"></div>
                    </div>
                    <div
                        ref={copy_ref}
                        class={classes!("philosophy-copy", "reveal-right", copy_in.then(|| "revealed"))}
                    >
                        <span class="eyebrow">{"Our Philosophy"}</span>
                        <h2>{"Harmony in"}<br/>{"Every Cup"}</h2>
                        <p>
                            {"We believe that coffee is a bridge between the busy world and inner peace. Inspired by the Japanese concept of "}
                            <em>{"Omotenashi"}</em>
                            {" (wholehearted hospitality), we serve not just a beverage, but an experience."}
                        </p>
                        <p>
                            {"Our beans are roasted in small batches in our Tokyo roastery, ensuring that the unique character of each origin shines through."}
                        </p>
                        <a href="#locations" class="text-link">{"VISIT OUR ROASTERY →"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(SignatureProduct)]
fn signature_product() -> Html {
    let (copy_ref, copy_in) = use_reveal();
    let (photo_ref, photo_in) = use_reveal();

    html! {
        <section id="signature" class="signature">
            <div class="section-inner">
                <div class="signature-columns">
                    <div
                        ref={copy_ref}
                        class={classes!("signature-copy", "reveal-left", copy_in.then(|| "revealed"))}
                    >
                        <div class="signature-eyebrow">
                            <span class="signature-star">{"★"}</span>
                            <span>{"SIGNATURE SWEET"}</span>
                        </div>
                        <h2>{"The Tokyo"}<br/>{"Candy Apple"}</h2>
                        <p>
                            {"A nostalgic festival treat reimagined. Crisp, premium Fuji apples coated in a whisper-thin layer of artisanal candy. The perfect balance of tart and sweet."}
                        </p>
                        <button class="signature-cta">{"ORDER NOW"}</button>
                    </div>
                    <div
                        ref={photo_ref}
                        class={classes!("signature-photo", "reveal-pop", photo_in.then(|| "revealed"))}
                    >
                        <img
                            src="https://picsum.photos/seed/candyapple/800/800"
                            alt="Candy apple"
                            referrerpolicy="no-referrer"
                        />
                        <div class="signature-badge">{"¥800"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MenuCardProps {
    item: MenuItem,
    index: usize,
}

#[function_component(MenuCard)]
fn menu_card(props: &MenuCardProps) -> Html {
    let (card_ref, card_in) = use_reveal();
    let item = props.item;
    let stagger_style = format!(
        "transition-delay: {}s;",
        motion::stagger_delay(props.index)
    );

    html! {
        <div
            ref={card_ref}
            class={classes!("menu-card", "reveal-up", card_in.then(|| "revealed"))}
            style={stagger_style}
        >
            <div class="menu-card-photo">
                <img src={item.image_ref} alt={item.title} referrerpolicy="no-referrer" />
                <div class="menu-card-overlay">
                    <p>{item.description}</p>
                    <span class="menu-card-rule"></span>
                    <span class="menu-card-price">{item.price}</span>
                </div>
            </div>
            <div class="menu-card-caption">
                <h3>{item.title}</h3>
                <p>{"SIGNATURE"}</p>
            </div>
        </div>
    }
}

#[function_component(MenuSection)]
fn menu_section() -> Html {
    html! {
        <section id="menu" class="menu-section">
            <div class="section-inner">
                <div class="menu-header">
                    <span class="eyebrow">{"Seasonal Menu"}</span>
                    <h2>{"Curated Selection"}</h2>
                    <div class="menu-header-rule"></div>
                </div>
                <div class="menu-grid">
                    { MENU_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <MenuCard key={index} item={*item} index={index} />
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(InfoSection)]
fn info_section() -> Html {
    let (copy_ref, copy_in) = use_reveal();

    html! {
        <section id="locations" class="info-section">
            <div class="section-inner">
                <div class="info-columns">
                    <div
                        ref={copy_ref}
                        class={classes!("info-copy", "reveal-up", copy_in.then(|| "revealed"))}
                    >
                        <h2>{"Visit Us"}</h2>
                        <div class="info-details">
                            <div>
                                <h3>{"DAIKANYAMA"}</h3>
                                <p>
                                    {"1-23-4 Sarugakucho, Shibuya-ku"}<br/>
                                    {"Tokyo, Japan 150-0033"}
                                </p>
                            </div>
                            <div>
                                <h3>{"HOURS"}</h3>
                                <p>
                                    {"Mon - Fri: 8:00 - 20:00"}<br/>
                                    {"Sat - Sun: 9:00 - 21:00"}
                                </p>
                            </div>
                        </div>
                        <div class="info-actions">
                            <button class="info-button-outline">{"GOOGLE MAPS"}</button>
                            <button class="info-button-solid">{"CONTACT US"}</button>
                        </div>
                    </div>
                    <div class="info-photo">
                        <img
                            src="https://picsum.photos/seed/tokyostreetnight/800/800"
                            alt="Store exterior"
                            referrerpolicy="no-referrer"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let (footer_ref, footer_in) = use_reveal();

    html! {
        <footer class="footer">
            <div
                ref={footer_ref}
                class={classes!("section-inner", "reveal-up", footer_in.then(|| "revealed"))}
            >
                <div class="footer-columns">
                    <div class="footer-brand">
                        <h2>{"KOMOREBI"}</h2>
                        <p>
                            {"A specialty coffee stand inspired by the fleeting beauty of nature and the art of Japanese hospitality."}
                        </p>
                    </div>
                    <div class="footer-links">
                        <h3>{"SITEMAP"}</h3>
                        <ul>
                            <li><a href="#">{"Home"}</a></li>
                            <li><a href="#about">{"About"}</a></li>
                            <li><a href="#menu">{"Menu"}</a></li>
                            <li><a href="#locations">{"Locations"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-links">
                        <h3>{"SOCIAL"}</h3>
                        <ul>
                            <li><a href="#">{"Instagram"}</a></li>
                            <li><a href="#">{"Twitter"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{"© 2024 KOMOREBI COFFEE. TOKYO."}</p>
                    <div class="footer-legal-links">
                        <a href="#">{"PRIVACY POLICY"}</a>
                        <a href="#">{"TERMS OF USE"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Marquee />
            <Philosophy />
            <SignatureProduct />
            <MenuSection />
            <InfoSection />
            <Footer />
            <style>
                {r#"
                    .landing-page {
                        background: #fafaf9;
                        color: #1c1917;
                    }

                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        position: relative;
                    }

                    .eyebrow {
                        display: block;
                        color: #dc2626;
                        font-weight: bold;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                        font-size: 0.7rem;
                        margin-bottom: 1rem;
                    }

                    .text-link {
                        display: inline-block;
                        margin-top: 2rem;
                        color: #1c1917;
                        font-weight: bold;
                        letter-spacing: 0.2em;
                        font-size: 0.7rem;
                        text-decoration: none;
                        border-bottom: 1px solid #1c1917;
                        padding-bottom: 0.5rem;
                        transition: color 0.3s ease, border-color 0.3s ease;
                    }

                    .text-link:hover {
                        color: #dc2626;
                        border-color: #dc2626;
                    }

                    /* One-shot entrance treatments. The `revealed` class is
                       added once per element and never removed. */
                    .reveal-up {
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }

                    .reveal-right {
                        opacity: 0;
                        transform: translateX(50px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }

                    .reveal-left {
                        opacity: 0;
                        transform: translateX(-50px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }

                    .reveal-scale {
                        opacity: 0;
                        transform: scale(0.9);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }

                    .reveal-pop {
                        opacity: 0;
                        transform: scale(0.8) rotate(-10deg);
                        transition: opacity 0.8s cubic-bezier(0.34, 1.56, 0.64, 1),
                                    transform 0.8s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }

                    .reveal-up.revealed,
                    .reveal-right.revealed,
                    .reveal-left.revealed,
                    .reveal-scale.revealed,
                    .reveal-pop.revealed {
                        opacity: 1;
                        transform: none;
                    }

                    /* Hero */

                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        background: #1c1917;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        will-change: transform;
                    }

                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.8;
                    }

                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.3);
                        z-index: 1;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 2;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        color: #fff;
                        padding: 0 1rem;
                        animation: hero-enter 1s ease-out both;
                    }

                    @keyframes hero-enter {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .hero-est {
                        writing-mode: vertical-rl;
                        font-size: 0.7rem;
                        letter-spacing: 0.5em;
                        height: 6rem;
                        border-left: 1px solid rgba(255, 255, 255, 0.3);
                        padding-left: 1rem;
                        margin-bottom: 2rem;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .hero-title {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 6rem;
                        font-weight: bold;
                        letter-spacing: -0.02em;
                        line-height: 1;
                        margin: 0 0 1.5rem 0;
                    }

                    .hero-subtitle {
                        max-width: 28rem;
                        color: #e7e5e4;
                        font-weight: 300;
                        letter-spacing: 0.05em;
                        line-height: 1.8;
                        margin-bottom: 3rem;
                    }

                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2rem;
                        background: #dc2626;
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: bold;
                        letter-spacing: 0.2em;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }

                    .hero-cta:hover {
                        background: #b91c1c;
                    }

                    .hero-scroll-cue {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        padding: 2rem;
                        z-index: 2;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.7rem;
                        letter-spacing: 0.25em;
                    }

                    .hero-scroll-line {
                        width: 3rem;
                        height: 1px;
                        background: rgba(255, 255, 255, 0.4);
                    }

                    /* Philosophy */

                    .philosophy {
                        padding: 8rem 0;
                        background: #fafaf9;
                        overflow: hidden;
                    }

                    .philosophy-glyph {
                        position: absolute;
                        top: 0;
                        right: 0;
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 20rem;
                        line-height: 1;
                        color: #f5f5f4;
                        user-select: none;
                        pointer-events: none;
                    }

                    .philosophy-columns {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 5rem;
                        position: relative;
                    }

                    @media (min-width: 769px) {
                        .philosophy-columns {
                            flex-direction: row;
                        }
                    }

                    .philosophy-photo-wrap {
                        width: 100%;
                        position: relative;
                    }

                    .philosophy-photo {
                        position: relative;
                        z-index: 1;
                    }

                    .philosophy-photo img {
                        width: 100%;
                        height: 700px;
                        object-fit: cover;
                        filter: grayscale(1);
                        transition: filter 0.7s ease;
                    }

                    .philosophy-photo img:hover {
                        filter: grayscale(0);
                    }

                    .philosophy-accent {
                        position: absolute;
                        bottom: -2.5rem;
                        left: -2.5rem;
                        width: 10rem;
                        height: 10rem;
                        background: #dc2626;
                        z-index: 0;
                    }

                    @media (max-width: 768px) {
                        .philosophy-accent {
                            display: none;
                        }
                        .philosophy-photo img {
                            height: 420px;
                        }
                    }

                    .philosophy-copy {
                        width: 100%;
                    }

                    .philosophy-copy h2 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 3.2rem;
                        font-weight: 500;
                        line-height: 1.15;
                        margin: 0 0 2rem 0;
                    }

                    .philosophy-copy p {
                        color: #57534e;
                        font-weight: 300;
                        font-size: 1.1rem;
                        line-height: 2;
                        margin-bottom: 1.5rem;
                    }

                    .philosophy-copy em {
                        font-family: Georgia, 'Times New Roman', serif;
                        color: #1c1917;
                    }

                    /* Signature product */

                    .signature {
                        padding: 8rem 0;
                        background: #dc2626;
                        color: #fff;
                        overflow: hidden;
                    }

                    .signature-columns {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 4rem;
                    }

                    @media (min-width: 769px) {
                        .signature-columns {
                            flex-direction: row;
                        }
                    }

                    .signature-copy {
                        width: 100%;
                    }

                    .signature-eyebrow {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.7rem;
                        font-weight: bold;
                        letter-spacing: 0.25em;
                        margin-bottom: 1rem;
                    }

                    .signature-copy h2 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 4rem;
                        font-weight: bold;
                        line-height: 1;
                        margin: 0 0 1.5rem 0;
                    }

                    .signature-copy p {
                        color: rgba(255, 255, 255, 0.9);
                        font-size: 1.1rem;
                        line-height: 1.7;
                        max-width: 28rem;
                    }

                    .signature-cta {
                        margin-top: 2rem;
                        padding: 1rem 2rem;
                        background: #fff;
                        color: #dc2626;
                        border: none;
                        font-weight: bold;
                        letter-spacing: 0.2em;
                        font-size: 0.7rem;
                        cursor: pointer;
                        transition: background 0.3s ease, color 0.3s ease;
                    }

                    .signature-cta:hover {
                        background: #1c1917;
                        color: #fff;
                    }

                    .signature-photo {
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        position: relative;
                    }

                    .signature-photo img {
                        width: 400px;
                        height: 400px;
                        max-width: 80vw;
                        max-height: 80vw;
                        object-fit: cover;
                        border-radius: 50%;
                        border: 4px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                    }

                    .signature-badge {
                        position: absolute;
                        top: -1.5rem;
                        right: 10%;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 50%;
                        background: #fff;
                        color: #dc2626;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: bold;
                        font-size: 1.25rem;
                        transform: rotate(12deg);
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
                        animation: badge-bob 4s ease-in-out infinite;
                    }

                    @keyframes badge-bob {
                        0% { transform: rotate(12deg) translateY(0); }
                        50% { transform: rotate(12deg) translateY(-20px); }
                        100% { transform: rotate(12deg) translateY(0); }
                    }

                    /* Menu grid */

                    .menu-section {
                        padding: 8rem 0;
                        background: #fff;
                    }

                    .menu-header {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .menu-header h2 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 2.8rem;
                        font-weight: 500;
                        margin: 0;
                    }

                    .menu-header-rule {
                        width: 1px;
                        height: 4rem;
                        background: #e7e5e4;
                        margin-top: 2rem;
                    }

                    .menu-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        column-gap: 3rem;
                        row-gap: 4rem;
                    }

                    @media (min-width: 640px) {
                        .menu-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .menu-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .menu-card {
                        cursor: pointer;
                    }

                    .menu-card-photo {
                        position: relative;
                        overflow: hidden;
                        aspect-ratio: 3 / 4;
                        background: #f5f5f4;
                        margin-bottom: 1.5rem;
                    }

                    .menu-card-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 1s ease;
                    }

                    .menu-card:hover .menu-card-photo img {
                        transform: scale(1.1);
                    }

                    .menu-card-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        opacity: 0;
                        transition: opacity 0.5s ease;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 1.5rem;
                    }

                    .menu-card:hover .menu-card-overlay {
                        opacity: 1;
                    }

                    .menu-card-overlay p {
                        color: #fff;
                        font-size: 0.9rem;
                        margin-bottom: 1rem;
                    }

                    .menu-card-rule {
                        width: 3rem;
                        height: 1px;
                        background: rgba(255, 255, 255, 0.5);
                        margin-bottom: 1rem;
                    }

                    .menu-card-price {
                        color: #fff;
                        font-family: Georgia, 'Times New Roman', serif;
                        font-style: italic;
                        font-size: 1.25rem;
                    }

                    .menu-card-caption {
                        text-align: center;
                    }

                    .menu-card-caption h3 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 1.25rem;
                        font-weight: 500;
                        margin: 0 0 0.25rem 0;
                        transition: color 0.3s ease;
                    }

                    .menu-card:hover .menu-card-caption h3 {
                        color: #dc2626;
                    }

                    .menu-card-caption p {
                        font-size: 0.7rem;
                        letter-spacing: 0.25em;
                        color: #a8a29e;
                        margin: 0;
                    }

                    /* Info */

                    .info-section {
                        padding: 8rem 0;
                        background: #1c1917;
                        color: #fff;
                    }

                    .info-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 5rem;
                        align-items: center;
                    }

                    @media (min-width: 1024px) {
                        .info-columns {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .info-copy h2 {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 2.5rem;
                        font-weight: 400;
                        margin: 0 0 2rem 0;
                    }

                    .info-details {
                        border-left: 1px solid rgba(255, 255, 255, 0.2);
                        padding-left: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }

                    .info-details h3 {
                        letter-spacing: 0.25em;
                        font-size: 1rem;
                        margin: 0 0 0.5rem 0;
                    }

                    .info-details p {
                        color: #a8a29e;
                        font-weight: 300;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .info-actions {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    .info-button-outline,
                    .info-button-solid {
                        padding: 1rem 2rem;
                        font-size: 0.7rem;
                        letter-spacing: 0.25em;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .info-button-outline {
                        background: transparent;
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                    }

                    .info-button-outline:hover {
                        background: #fff;
                        color: #1c1917;
                    }

                    .info-button-solid {
                        background: #dc2626;
                        color: #fff;
                        border: 1px solid #dc2626;
                    }

                    .info-button-solid:hover {
                        background: #b91c1c;
                    }

                    .info-photo {
                        position: relative;
                        height: 500px;
                        overflow: hidden;
                    }

                    .info-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }

                    .info-photo:hover img {
                        transform: scale(1.05);
                    }

                    /* Footer */

                    .footer {
                        background: #0c0a09;
                        color: #78716c;
                        padding: 5rem 0;
                        border-top: 1px solid #1c1917;
                    }

                    .footer-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        margin-bottom: 4rem;
                    }

                    @media (min-width: 769px) {
                        .footer-columns {
                            grid-template-columns: 2fr 1fr 1fr;
                        }
                    }

                    .footer-brand h2 {
                        font-family: Georgia, 'Times New Roman', serif;
                        color: #fff;
                        font-size: 1.8rem;
                        margin: 0 0 1.5rem 0;
                    }

                    .footer-brand p {
                        max-width: 20rem;
                        font-weight: 300;
                        font-size: 0.9rem;
                        line-height: 1.7;
                    }

                    .footer-links h3 {
                        color: #fff;
                        font-size: 0.7rem;
                        letter-spacing: 0.25em;
                        margin: 0 0 1.5rem 0;
                    }

                    .footer-links ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .footer-links a {
                        color: #78716c;
                        text-decoration: none;
                        font-size: 0.9rem;
                        transition: color 0.3s ease;
                    }

                    .footer-links a:hover {
                        color: #ef4444;
                    }

                    .footer-legal {
                        border-top: 1px solid #1c1917;
                        padding-top: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: space-between;
                        align-items: center;
                        font-size: 0.7rem;
                        letter-spacing: 0.1em;
                    }

                    @media (min-width: 769px) {
                        .footer-legal {
                            flex-direction: row;
                        }
                    }

                    .footer-legal p {
                        margin: 0;
                    }

                    .footer-legal-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .footer-legal-links a {
                        color: #78716c;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .footer-legal-links a:hover {
                        color: #fff;
                    }

                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 3.5rem;
                        }
                        .philosophy-glyph {
                            font-size: 10rem;
                        }
                        .signature-copy h2 {
                            font-size: 2.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_exactly_six_items_in_fixed_order() {
        assert_eq!(MENU_ITEMS.len(), 6);
        let titles: Vec<&str> = MENU_ITEMS.iter().map(|item| item.title).collect();
        assert_eq!(
            titles,
            vec![
                "Hand Drip Blend",
                "Matcha Latte",
                "Cold Brew",
                "Espresso Tonic",
                "Basque Cake",
                "Seasonal Tart",
            ]
        );
    }

    #[test]
    fn every_menu_item_is_fully_populated() {
        for item in MENU_ITEMS.iter() {
            assert!(!item.title.is_empty());
            assert!(item.price.starts_with('¥'));
            assert!(!item.description.is_empty());
            assert!(item.image_ref.starts_with("https://"));
        }
    }

    #[test]
    fn card_stagger_follows_grid_order() {
        for (index, _) in MENU_ITEMS.iter().enumerate() {
            let expected = index as f64 * 0.1;
            assert!((motion::stagger_delay(index) - expected).abs() < 1e-12);
        }
    }
}
