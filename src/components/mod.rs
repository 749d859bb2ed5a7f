mod about;
mod clients;
mod contact_section;
mod footer;
mod hero;
mod icons;
mod navbar;
mod portfolio;
mod pricing;
mod project_modal;
mod services;
mod testimonials;
mod whatsapp_button;

pub use about::About;
pub use clients::Clients;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use portfolio::Portfolio;
pub use pricing::Pricing;
pub use project_modal::ProjectModalView;
pub use services::Services;
pub use testimonials::Testimonials;
pub use whatsapp_button::WhatsAppButton;
