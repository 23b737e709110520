//! Text input with a leading icon and an inline validation message

use leptos::*;

use super::Icon;

#[component]
pub fn Input(
  id: &'static str,
  icon: &'static str,
  #[prop(into)] placeholder: Signal<String>,
  #[prop(into)] value: Signal<String>,
  on_input: Callback<String>,
  #[prop(optional)] on_blur: Option<Callback<()>>,
  #[prop(optional, into)] error: Option<Signal<Option<String>>>,
  #[prop(default = "text")] input_type: &'static str,
  #[prop(optional)] autocomplete: Option<&'static str>,
  #[prop(optional, into)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
  let error_msg = move || error.and_then(|e| e.get());
  let error_id = format!("{}-error", id);
  let described_by = error_id.clone();

  view! {
    <div class="form-group">
      <div class=move || if error_msg().is_some() { "input-wrapper has-error" } else { "input-wrapper" }>
        <span class="input-icon">
          <Icon name=icon size=20/>
        </span>
        <input
          id=id
          type=input_type
          class="input"
          placeholder=move || placeholder.get()
          autocomplete=autocomplete
          aria-invalid=move || error_msg().is_some().to_string()
          aria-describedby=described_by
          prop:value=move || value.get()
          on:input=move |ev| on_input.call(event_target_value(&ev))
          on:blur=move |_| {
            if let Some(on_blur) = on_blur {
              on_blur.call(());
            }
          }
          disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
        />
      </div>
      <Show when=move || error_msg().is_some()>
        <p id=error_id.clone() class="input-error">{error_msg}</p>
      </Show>
    </div>
  }
}
