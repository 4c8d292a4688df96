mod about;
mod contact;
mod education;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;
mod social_links;
mod theme_toggle;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
