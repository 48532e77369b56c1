use dioxus::prelude::*;

use enrol_common::Center;

use super::render_to_html;

#[allow(non_snake_case)]
#[component]
fn SuccessPage(center: String, form_path: String) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "Enrolment Submitted — {center}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4 font-sans text-gray-900",
            div { class: "bg-white rounded-2xl shadow-xl p-8 max-w-md w-full text-center",
                div { class: "mb-6",
                    div { class: "mx-auto w-16 h-16 bg-green-100 rounded-full flex items-center justify-center text-green-600 text-3xl",
                        "\u{2713}"
                    }
                }
                h2 { class: "text-2xl font-bold text-gray-900 mb-2",
                    "Enrolment Submitted Successfully!"
                }
                p { class: "text-gray-600 mb-6",
                    "Thank you for your enrolment. We'll review your submission and contact you shortly."
                }
                a {
                    href: "{form_path}",
                    class: "inline-block bg-indigo-600 text-white px-6 py-3 rounded-lg font-medium hover:bg-indigo-700 transition-colors",
                    "Submit Another Enrolment"
                }
            }
        }
    }
}

/// Render the confirmation panel shown after a successful insert. The
/// "submit another" link resets back to the center's blank form.
pub fn render_success(center: Center) -> String {
    let mut dom = VirtualDom::new_with_props(
        SuccessPage,
        SuccessPageProps {
            center: center.name().to_string(),
            form_path: center.path().to_string(),
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
