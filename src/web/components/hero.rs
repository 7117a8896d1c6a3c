//! Hero banner and intro paragraphs.

use super::PhoneLink;
use crate::domain::entities::Hero;
use askama::Template;

/// Renders `templates/components/hero.html`.
#[derive(Template)]
#[template(path = "components/hero.html")]
pub struct HeroBanner<'a> {
    pub hero: &'a Hero,
    pub phone: Option<PhoneLink<'a>>,
}

/// Renders `templates/components/intro.html`.
#[derive(Template)]
#[template(path = "components/intro.html")]
pub struct IntroSection<'a> {
    pub paragraphs: &'a [String],
}
