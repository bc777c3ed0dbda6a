use common::structs::FooterConfig;
use yew::prelude::*;

mod components;

use components::Footer;

fn main() {
    yew::Renderer::<Root>::new().render();
}

#[function_component]
fn Root() -> Html {
    let config = use_state(FooterConfig::galactic_market);

    {
        let config = (*config).clone();
        use_effect_with_deps(
            |config: &FooterConfig| {
                // none of the built-in contributors have an avatar yet
                for contributor in config.missing_avatars() {
                    gloo::console::warn!(format!(
                        "No avatar configured for {} ({})",
                        contributor.name, contributor.profile_url
                    ));
                }
                || {}
            },
            config,
        );
    }

    html! {
        <>
            <main class="page-content"></main>
            <Footer config={(*config).clone()} />
        </>
    }
}
