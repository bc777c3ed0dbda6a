mod contributor_link;
mod footer;

pub use contributor_link::ContributorLink;
pub use footer::Footer;
