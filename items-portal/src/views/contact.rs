use maud::{html, Markup};

use super::{page_layout, urls};
use crate::domain::models::contact::ContactSubmission;

/// 提交失败时回显已填写内容和通用错误信息
pub fn form(values: &ContactSubmission, error: Option<&str>) -> Markup {
    let body = html! {
        h2 { "Contact Us" }
        @if let Some(error) = error {
            p class="error" role="alert" { (error) }
        }
        form method="post" action=(urls::CONTACT) {
            input type="text" name="name" placeholder="Your Name" value=(values.name) required;
            input type="email" name="email" placeholder="Your Email" value=(values.email) required;
            textarea name="message" placeholder="Your Message" required { (values.message) }
            button type="submit" { "Send" }
        }
    };
    page_layout("Contact", body)
}

pub fn thank_you() -> Markup {
    let body = html! {
        h2 { "Thank you!" }
        p { "Your message has been sent. We will get back to you soon." }
        a href=(urls::HOME) { "← Back to Home" }
    };
    page_layout("Thank You", body)
}
