//! Inline SVG icons (feather set, flattened to paths)

use leptos::*;

fn icon_paths(name: &str) -> &'static [&'static str] {
  match name {
    "mail" => &[
      "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
      "M22 6l-10 7L2 6",
    ],
    "lock" => &[
      "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
      "M7 11V7a5 5 0 0 1 10 0v4",
    ],
    "sun" => &[
      "M12 7a5 5 0 1 0 0 10a5 5 0 1 0 0-10z",
      "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42",
    ],
    "moon" => &["M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"],
    "alert-circle" => &[
      "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
      "M12 8v4M12 16h.01",
    ],
    "x" => &["M18 6L6 18M6 6l12 12"],
    _ => &[],
  }
}

#[component]
pub fn Icon(name: &'static str, #[prop(default = 20)] size: u32) -> impl IntoView {
  let paths = icon_paths(name);
  if paths.is_empty() {
    logging::warn!("unknown icon: {}", name);
  }

  view! {
    <svg
      class=format!("icon icon-{}", name)
      xmlns="http://www.w3.org/2000/svg"
      width=size
      height=size
      viewBox="0 0 24 24"
      fill="none"
      stroke="currentColor"
      stroke-width="2"
      stroke-linecap="round"
      stroke-linejoin="round"
    >
      {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
    </svg>
  }
}
