use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{info, warn};

use crate::behavior::theme::{self, LocalPreferences};
use crate::components::contact_form::ContactForm;
use crate::components::easter_egg::EasterEgg;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::notification::use_notifier;
use crate::components::reveal::Reveal;
use crate::components::stats::StatItem;
use crate::dom;
use crate::state::{PageAction, PageState};

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Fast", "Static assets and a single wasm bundle keep first paint quick."),
    ("🛡️", "Reliable", "Every deploy goes through the same checks, every time."),
    ("🎨", "Themeable", "Light and dark themes that remember what you picked."),
];

const STATS: [(u64, &str, &str); 3] = [
    (150, "Deploys shipped", "+"),
    (99, "Uptime", "%"),
    (24, "Regions", ""),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_reducer(|| PageState::new(theme::check_preference(&LocalPreferences, dom::prefers_dark())));
    let notifier = use_notifier();

    // Keep the document attribute in step with the theme flag.
    use_effect_with_deps(
        |theme| {
            if let Err(e) = dom::apply_theme(*theme) {
                warn!("Could not apply theme: {}", e);
            }
            || ()
        },
        page.theme,
    );

    {
        use_effect_with_deps(
            move |_| {
                info!("Landing page initialized successfully");
                || ()
            },
            (),
        );
    }

    {
        let page = page.clone();
        use_event_with_window("resize", move |_: web_sys::Event| match dom::viewport_width() {
            Ok(width) => page.dispatch(PageAction::Resized(width)),
            Err(e) => warn!("Could not read viewport width: {}", e),
        });
    }

    let on_toggle_theme = {
        let page = page.clone();
        Callback::from(move |_: ()| {
            let (next, saved) = theme::toggle_theme(page.theme, &LocalPreferences);
            if let Err(e) = saved {
                warn!("Theme preference not saved: {}", e);
                notifier.error("Your theme choice could not be saved");
            }
            page.dispatch(PageAction::SetTheme(next));
            notifier.success(format!("Switched to {} mode", next));
        })
    };

    html! {
        <div class="landing-page">
            <style>{ STYLES }</style>
            <Nav page={page.clone()} {on_toggle_theme} />
            <main>
                <Hero />

                <section id="features" class="features">
                    <h2>{"Features"}</h2>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <Reveal class="feature-card">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="stats">
                    { for STATS.iter().map(|(target, label, suffix)| html! {
                        <Reveal class="stat-item">
                            <StatItem target={*target} label={*label} suffix={*suffix} />
                        </Reveal>
                    }) }
                </section>

                <section id="about" class="about">
                    <h2>{"About"}</h2>
                    <Reveal>
                        <p>{"This page exists to prove a deploy pipeline works end to end."}</p>
                    </Reveal>
                    <Reveal>
                        <p>{"It is small on purpose, but everything on it behaves like a real site: navigation, theming, forms and a few surprises."}</p>
                    </Reveal>
                </section>

                <ContactForm />
            </main>
            <footer class="footer">
                <p>{"© 2024 Testing Deploy Project"}</p>
            </footer>
            <EasterEgg />
        </div>
    }
}

const STYLES: &str = r#"
:root {
    --primary: #6366f1;
    --text: #1f2937;
    --text-muted: #6b7280;
    --bg: #ffffff;
    --bg-alt: #f9fafb;
    --card: #ffffff;
    --border: #e5e7eb;
}
[data-theme="dark"] {
    --text: #f9fafb;
    --text-muted: #9ca3af;
    --bg: #111827;
    --bg-alt: #1f2937;
    --card: #1f2937;
    --border: #374151;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: var(--bg);
    color: var(--text);
    transition: background 0.3s ease, color 0.3s ease, filter 0.3s ease;
}
header {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 1000;
    transition: background 0.3s ease;
}
.navbar {
    max-width: 1200px;
    margin: 0 auto;
    height: 80px;
    padding: 0 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { font-weight: 700; font-size: 1.5rem; color: var(--primary); text-decoration: none; }
.nav-links { display: flex; gap: 2rem; list-style: none; }
.nav-link { color: var(--text); text-decoration: none; font-weight: 500; }
.nav-link:hover { color: var(--primary); }
.nav-actions { display: flex; align-items: center; gap: 1rem; }
.theme-toggle { background: none; border: none; font-size: 1.25rem; cursor: pointer; }
.hamburger { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
.hamburger span {
    width: 25px;
    height: 3px;
    background: var(--text);
    transition: transform 0.3s ease, opacity 0.3s ease;
}
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 2rem;
    background: linear-gradient(135deg, rgba(99, 102, 241, 0.12), transparent);
}
.hero h1 { font-size: 3rem; margin-bottom: 1rem; }
.hero-subtitle { color: var(--text-muted); font-size: 1.25rem; margin-bottom: 2rem; }
.cta-button, .submit-btn {
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    padding: 1rem 2rem;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.15s ease, opacity 0.2s ease;
}
.submit-btn:disabled { opacity: 0.7; cursor: not-allowed; }
section { padding: 5rem 2rem; }
section h2 { text-align: center; font-size: 2.25rem; margin-bottom: 3rem; }
.feature-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}
.feature-card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 2rem;
}
.feature-icon { font-size: 2rem; margin-bottom: 1rem; }
.feature-card p { color: var(--text-muted); }
.stats {
    background: var(--bg-alt);
    display: flex;
    justify-content: center;
    gap: 4rem;
    flex-wrap: wrap;
    text-align: center;
}
.stat-item-inner { display: flex; flex-direction: column; }
.stat-number { font-size: 3rem; font-weight: 700; color: var(--primary); }
.stat-label { color: var(--text-muted); }
.about { max-width: 800px; margin: 0 auto; }
.about p { font-size: 1.125rem; line-height: 1.8; margin-bottom: 1.5rem; color: var(--text-muted); }
.contact-form { max-width: 600px; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.contact-form input, .contact-form textarea {
    width: 100%;
    padding: 0.875rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--card);
    color: var(--text);
    font: inherit;
}
.loading {
    display: inline-block;
    width: 16px;
    height: 16px;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: white;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
    vertical-align: middle;
}
@keyframes spin { to { transform: rotate(360deg); } }
.form-response {
    max-width: 600px;
    margin: 1rem auto 0;
    padding: 1rem;
    border-radius: 8px;
    text-align: center;
    opacity: 0;
    transition: opacity 0.3s ease;
}
.form-response.show { opacity: 1; }
.form-response.success { background: rgba(16, 185, 129, 0.12); color: #10b981; }
.form-response.error { background: rgba(239, 68, 68, 0.12); color: #ef4444; }
.fade-in { opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease; }
.fade-in.visible { opacity: 1; transform: translateY(0); }
.footer { padding: 2rem; text-align: center; color: var(--text-muted); border-top: 1px solid var(--border); }
@media (max-width: 768px) {
    .hamburger { display: flex; }
    .nav-links {
        position: fixed;
        top: 80px;
        left: -100%;
        width: 100%;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
        padding: 2rem 0;
        background: var(--bg);
        transition: left 0.3s ease;
    }
    .nav-links.active { left: 0; }
    .hero h1 { font-size: 2.25rem; }
}
"#;
