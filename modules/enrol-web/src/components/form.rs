use dioxus::prelude::*;

use enrol_common::{Center, FieldError, Grade, RawEnrolment};

use super::render_to_html;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-transparent";

/// Disable the submit button once a submission is in flight. Only one
/// insert may be awaiting the store at a time.
const SUBMIT_GUARD: &str = "var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Submitting...';";

fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

#[allow(non_snake_case)]
#[component]
fn TextField(
    label: String,
    name: String,
    input_type: String,
    placeholder: String,
    value: String,
    error: Option<String>,
    required: bool,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-2",
                "{label} "
                if required {
                    span { class: "text-red-500", "*" }
                }
            }
            input {
                r#type: "{input_type}",
                name: "{name}",
                value: "{value}",
                placeholder: "{placeholder}",
                class: INPUT_CLASS,
            }
            if let Some(err) = &error {
                p { class: "mt-1 text-sm text-red-600", "{err}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn EnrolmentPage(
    center: String,
    action: String,
    values: RawEnrolment,
    errors: Vec<FieldError>,
    banner: Option<String>,
) -> Element {
    let title = format!("Enrolment — {center}");
    let address_error = error_for(&errors, "address");
    let school_error = error_for(&errors, "school");
    let grade_error = error_for(&errors, "current_grade");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 py-12 px-4 sm:px-6 lg:px-8 font-sans text-gray-900",
            div { class: "max-w-2xl mx-auto",
                div { class: "bg-white rounded-2xl shadow-xl p-8",
                    div { class: "mb-8 text-center",
                        h1 { class: "text-3xl font-bold text-gray-900 mb-2",
                            "Tutoring Centre Enrolment."
                        }
                        p { class: "text-gray-600",
                            "Please fill in all details to enrol your child in our tutoring program at {center}"
                        }
                    }

                    if let Some(message) = &banner {
                        div { class: "mb-6 p-4 bg-red-50 border border-red-200 rounded-lg",
                            p { class: "text-red-800 text-sm", "{message}" }
                        }
                    }

                    form { method: "POST", action: "{action}", class: "space-y-6",
                        "onsubmit": SUBMIT_GUARD,
                        TextField {
                            label: "Student First Name".to_string(),
                            name: "student_first_name".to_string(),
                            input_type: "text".to_string(),
                            placeholder: "Enter student's first name".to_string(),
                            value: values.student_first_name.clone(),
                            error: error_for(&errors, "student_first_name"),
                            required: true,
                        }
                        TextField {
                            label: "Student Last Name".to_string(),
                            name: "student_last_name".to_string(),
                            input_type: "text".to_string(),
                            placeholder: "Enter student's last name".to_string(),
                            value: values.student_last_name.clone(),
                            error: error_for(&errors, "student_last_name"),
                            required: true,
                        }
                        TextField {
                            label: "Parent's First Name".to_string(),
                            name: "parent_first_name".to_string(),
                            input_type: "text".to_string(),
                            placeholder: "Enter parent's first name".to_string(),
                            value: values.parent_first_name.clone(),
                            error: error_for(&errors, "parent_first_name"),
                            required: true,
                        }
                        TextField {
                            label: "Parent's Last Name".to_string(),
                            name: "parent_last_name".to_string(),
                            input_type: "text".to_string(),
                            placeholder: "Enter parent's last name".to_string(),
                            value: values.parent_last_name.clone(),
                            error: error_for(&errors, "parent_last_name"),
                            required: true,
                        }
                        TextField {
                            label: "Parent Mobile".to_string(),
                            name: "parent_mobile".to_string(),
                            input_type: "tel".to_string(),
                            placeholder: "0412 345 678 or +61 412 345 678".to_string(),
                            value: values.parent_mobile.clone(),
                            error: error_for(&errors, "parent_mobile"),
                            required: true,
                        }
                        TextField {
                            label: "Email Address".to_string(),
                            name: "email_address".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "parent@example.com".to_string(),
                            value: values.email_address.clone(),
                            error: error_for(&errors, "email_address"),
                            required: true,
                        }
                        TextField {
                            label: "Secondary Email Address (Optional)".to_string(),
                            name: "secondary_email_address".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "secondary@example.com".to_string(),
                            value: values.secondary_email_address.clone(),
                            error: error_for(&errors, "secondary_email_address"),
                            required: false,
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2",
                                "Address "
                                span { class: "text-red-500", "*" }
                            }
                            textarea {
                                name: "address",
                                rows: "3",
                                placeholder: "Enter your full address",
                                class: INPUT_CLASS,
                                "{values.address}"
                            }
                            if let Some(err) = &address_error {
                                p { class: "mt-1 text-sm text-red-600", "{err}" }
                            }
                        }
                        TextField {
                            label: "School".to_string(),
                            name: "school".to_string(),
                            input_type: "text".to_string(),
                            placeholder: "Enter school name".to_string(),
                            value: values.school.clone(),
                            error: school_error,
                            required: true,
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2",
                                "Current Grade "
                                span { class: "text-red-500", "*" }
                            }
                            select { name: "current_grade", class: INPUT_CLASS,
                                option { value: "", "Select a grade" }
                                for grade in Grade::ALL.iter() {
                                    {
                                        let label = grade.label();
                                        let selected = values.current_grade == label;
                                        rsx! {
                                            option { value: label, selected: selected, "{label}" }
                                        }
                                    }
                                }
                            }
                            if let Some(err) = &grade_error {
                                p { class: "mt-1 text-sm text-red-600", "{err}" }
                            }
                        }
                        div { class: "pt-4",
                            button {
                                r#type: "submit",
                                class: "w-full bg-indigo-600 text-white py-4 px-6 rounded-lg font-medium text-lg hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50 disabled:cursor-not-allowed transition-colors",
                                "Submit Enrolment"
                            }
                        }
                    }
                }
                p { class: "text-center text-gray-600 text-sm mt-6",
                    "All fields marked with "
                    span { class: "text-red-500", "*" }
                    " are required"
                }
            }
        }
    }
}

/// Render the enrolment form for a center, with the user's raw values
/// preserved, inline field errors, and an optional page-level banner.
pub fn render_form(
    center: Center,
    values: &RawEnrolment,
    errors: &[FieldError],
    banner: Option<String>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        EnrolmentPage,
        EnrolmentPageProps {
            center: center.name().to_string(),
            action: center.path().to_string(),
            values: values.clone(),
            errors: errors.to_vec(),
            banner,
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_renders_all_fields() {
        let html = render_form(Center::Cabramatta, &RawEnrolment::default(), &[], None);
        for name in [
            "student_first_name",
            "student_last_name",
            "parent_first_name",
            "parent_last_name",
            "parent_mobile",
            "email_address",
            "secondary_email_address",
            "address",
            "school",
            "current_grade",
        ] {
            assert!(html.contains(name), "missing field {name}");
        }
        assert!(html.contains("Cabramatta ABC"));
        assert!(html.contains("action=\"/cabra\""));
        assert!(html.contains("Submit Enrolment"));
    }

    #[test]
    fn form_lists_all_thirteen_grades() {
        let html = render_form(Center::Liverpool, &RawEnrolment::default(), &[], None);
        for grade in Grade::ALL {
            assert!(html.contains(grade.label()), "missing grade {grade}");
        }
        assert!(html.contains("Select a grade"));
    }

    #[test]
    fn inline_errors_render_next_to_fields() {
        let errors = vec![FieldError::new(
            "parent_mobile",
            "Please enter a valid Australian mobile number",
        )];
        let html = render_form(Center::Cabramatta, &RawEnrolment::default(), &errors, None);
        assert!(html.contains("Please enter a valid Australian mobile number"));
    }

    #[test]
    fn banner_renders_store_message() {
        let html = render_form(
            Center::Liverpool,
            &RawEnrolment::default(),
            &[],
            Some("duplicate key value violates unique constraint".to_string()),
        );
        assert!(html.contains("duplicate key value violates unique constraint"));
        assert!(html.contains("Liverpool Mr Pauls Tutoring"));
    }

    #[test]
    fn raw_values_are_preserved_on_rerender() {
        let values = RawEnrolment {
            student_first_name: "john".into(),
            parent_mobile: "123".into(),
            ..Default::default()
        };
        let html = render_form(Center::Cabramatta, &values, &[], None);
        assert!(html.contains("john"));
        assert!(html.contains("123"));
    }
}
