//! Generic renderer for the contact, demo, and custom-solution forms.

use leptos::prelude::*;

use crate::state::forms::{FieldKind, FieldSpec, FormSpec, FormState};

use super::section::{Card, Section};

/// Renders `spec` until submitted, then its thank-you view.
#[component]
pub fn LeadForm(spec: FormSpec) -> impl IntoView {
    let form = RwSignal::new(FormState::new(&spec));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit(&spec);
        });
    };

    move || {
        if form.with(|f| f.submitted) {
            let email = form.with_untracked(|f| f.value("email").to_owned());
            view! {
                <Section>
                    <div class="thanks">
                        <div class="thanks__icon" aria-hidden="true">"\u{2713}"</div>
                        <h1>"Thank You!"</h1>
                        <p>{spec.thanks_lead}" "<strong>{email}</strong>" "{spec.thanks_tail}</p>
                        <a class="button button--primary" href="/">"Return to Home"</a>
                    </div>
                </Section>
            }
            .into_any()
        } else {
            let fields = spec.fields.iter().map(|f| view! { <FormField field=*f form/> }).collect_view();
            view! {
                <Section>
                    <Card>
                        <form class="lead-form" id=spec.id on:submit=on_submit>
                            {fields}
                            <button class="button button--primary button--lg button--block" type="submit">
                                {spec.submit_label}
                            </button>
                        </form>
                    </Card>
                </Section>
            }
            .into_any()
        }
    }
}

#[component]
fn FormField(field: FieldSpec, form: RwSignal<FormState>) -> impl IntoView {
    let name = field.name;
    let value = move || form.with(|f| f.value(name).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let v = event_target_value(&ev);
        form.update(|f| f.set(name, v));
    };

    let control = match field.kind {
        FieldKind::Text | FieldKind::Email => {
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
            view! {
                <input
                    class="input"
                    type=input_type
                    id=name
                    name=name
                    placeholder=field.placeholder
                    required=field.required
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
        FieldKind::TextArea { rows } => view! {
            <textarea
                class="input input--area"
                id=name
                name=name
                rows=rows.to_string()
                placeholder=field.placeholder
                required=field.required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        FieldKind::Select { prompt, options } => {
            let choices = options
                .iter()
                .map(|o| view! { <option value=o.value>{o.label}</option> })
                .collect_view();
            view! {
                <select
                    class="input"
                    id=name
                    name=name
                    required=field.required
                    prop:value=value
                    on:change=on_input
                >
                    <option value="">{prompt}</option>
                    {choices}
                </select>
            }
            .into_any()
        }
    };

    view! {
        <div class="lead-form__field">
            <label class="lead-form__label" for=name>{field.display_label()}</label>
            {control}
        </div>
    }
}
