use common::structs::Contributor;
use yew::prelude::*;

/// Avatar image linking to a contributor's profile, opened in a new tab.
#[function_component]
pub fn ContributorLink(props: &ContributorLinkProps) -> Html {
    let contributor = &props.contributor;
    html! {
        <a href={contributor.profile_url.clone()} target="_blank" rel="noopener noreferrer">
            <img
                class="circle responsive-img"
                src={contributor.avatar_url.clone()}
                alt={contributor.name.clone()}
                style="margin-left: 10px;"
            />
        </a>
    }
}

#[derive(Clone, Properties, PartialEq, Debug)]
pub struct ContributorLinkProps {
    pub contributor: Contributor,
}
