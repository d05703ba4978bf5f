use leptos::prelude::*;

use crate::core::forms::FormController;
use crate::core::validation::FieldName;
use crate::ui::icon::{Icon, icons};

/// Reactive handles connecting one input to a form controller
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub name: &'static str,
    pub value: Signal<String>,
    /// Errors to render; empty until the field is touched
    pub errors: Signal<Vec<&'static str>>,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

/// Bind a field of the controller held in `controller`
pub fn bind_field<C>(controller: RwSignal<C>, field: C::Field) -> FieldBinding
where
    C: FormController + Send + Sync + 'static,
{
    FieldBinding {
        name: field.as_str(),
        value: Signal::derive(move || controller.with(|c| c.form().value(field).to_string())),
        errors: Signal::derive(move || controller.with(|c| c.form().visible_errors(field))),
        on_input: Callback::new(move |value: String| {
            controller.update(|c| c.form_mut().set_value(field, value));
        }),
        on_blur: Callback::new(move |_: ()| controller.update(|c| c.form_mut().blur(field))),
    }
}

/// Labelled input showing its validation errors once touched
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Connection to the form controller
    binding: FieldBinding,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Rendered next to the label (e.g. a "forgot password" link)
    #[prop(default = None)]
    label_action: Option<AnyView>,
) -> impl IntoView {
    let invalid = move || !binding.errors.with(Vec::is_empty);

    view! {
        <div class="space-y-1.5" data-invalid=move || invalid().to_string()>
            <div class="flex items-center justify-between">
                <label for=binding.name class="label">{label}</label>
                {label_action}
            </div>
            <input
                type=input_type
                id=binding.name
                name=binding.name
                autocomplete=autocomplete
                class="input-base"
                class:border-red-500=invalid
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.on_input.run(event_target_value(&ev))
                on:blur=move |_| binding.on_blur.run(())
            />
            {move || {
                binding.errors.get().into_iter().map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                }).collect_view()
            }}
        </div>
    }
}
