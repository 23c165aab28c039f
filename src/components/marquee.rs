use yew::prelude::*;

use crate::config;

/// Base phrase sequence. The strip renders this `MARQUEE_COPIES` times
/// back-to-back so the content at -50% translation is identical to the
/// content at 0% and the loop restarts seamlessly.
const PHRASES: [(&str, &str); 4] = [
    ("marquee-note", "Seasonal Special"),
    ("marquee-highlight", "SAKURA BLEND"),
    ("marquee-note", "Tokyo Roastery"),
    ("marquee-plain", "SINGLE ORIGIN"),
];

/// Continuous horizontal ticker under the hero. Time-driven only; ignores
/// scroll and viewport state entirely.
#[function_component(Marquee)]
pub fn marquee() -> Html {
    let track_style = format!("animation-duration: {}s;", config::MARQUEE_DURATION_SECS);

    html! {
        <div class="marquee">
            <div class="marquee-track" style={track_style}>
                { (0..config::MARQUEE_COPIES).map(|copy| html! {
                    <div class="marquee-group" key={copy}>
                        { PHRASES.iter().map(|(class, text)| html! {
                            <span class={*class}>{*text}</span>
                        }).collect::<Html>() }
                    </div>
                }).collect::<Html>() }
            </div>
            <style>
                {r#"
                    .marquee {
                        background: #1c1917;
                        color: #fff;
                        padding: 1rem 0;
                        overflow: hidden;
                        white-space: nowrap;
                        border-bottom: 1px solid #292524;
                    }

                    .marquee-track {
                        display: inline-flex;
                        align-items: center;
                        animation-name: marquee-slide;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                        will-change: transform;
                    }

                    @keyframes marquee-slide {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }

                    .marquee-group {
                        display: flex;
                        align-items: center;
                    }

                    .marquee-group span {
                        margin: 0 3rem;
                    }

                    .marquee-note {
                        font-family: Georgia, 'Times New Roman', serif;
                        font-style: italic;
                        font-size: 1.5rem;
                        color: #78716c;
                    }

                    .marquee-highlight {
                        font-weight: bold;
                        letter-spacing: 0.25em;
                        font-size: 0.85rem;
                        color: #ef4444;
                    }

                    .marquee-plain {
                        font-weight: bold;
                        letter-spacing: 0.25em;
                        font-size: 0.85rem;
                        color: #fff;
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
    fn strip_repeats_base_sequence_an_even_number_of_times() {
        let rendered = config::MARQUEE_COPIES * PHRASES.len();
        assert_eq!(rendered % PHRASES.len(), 0);
        // an odd repeat count would make the -50% frame land mid-sequence
        assert_eq!(config::MARQUEE_COPIES % 2, 0);
    }

    #[test]
    fn cycle_duration_is_fixed() {
        assert_eq!(config::MARQUEE_DURATION_SECS, 30);
    }
}
