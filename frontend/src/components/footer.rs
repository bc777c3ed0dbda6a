use common::structs::FooterConfig;
use yew::prelude::*;

use crate::components::ContributorLink;

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    html! {
        <footer class="page-footer">
            <div class="container">
                <div class="left">
                    { props.config.copyright.clone() }
                </div>
                <div class="right">
                    {
                        for props.config.contributors.iter().enumerate().map(|(index, contributor)| html! {
                            <ContributorLink key={index} contributor={contributor.clone()} />
                        })
                    }
                </div>
            </div>
        </footer>
    }
}

#[derive(Clone, Properties, PartialEq, Debug, Default)]
pub struct FooterProps {
    #[prop_or_default]
    pub config: FooterConfig,
}
