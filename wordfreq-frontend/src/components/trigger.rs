use leptos::{ev, html, *};

use wordfreq_core::view::Phase;

#[component]
pub fn TriggerButton<F>(
    phase: Signal<Phase>,
    label: Signal<&'static str>,
    disabled: Signal<bool>,
    on_trigger: F,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let button_ref = create_node_ref::<html::Button>();

    // Focus the trigger as soon as the page becomes interactive.
    button_ref.on_load(|button| {
        request_animation_frame(move || {
            if let Err(err) = button.focus() {
                log::warn!("Unable to focus trigger: {err:?}");
            }
        });
    });

    let class = move || {
        let background = match phase.get() {
            Phase::Loading => "bg-gray-400",
            Phase::Ready => "bg-red-500",
            Phase::Idle => "bg-blue-500",
        };
        format!("{background} text-white px-4 py-2 rounded mt-8 block mx-auto focus:outline-none")
    };

    view! {
      <button
        node_ref = button_ref
        class = class
        prop:disabled = move || disabled.get()
        aria-label = move || label.get()
        on:click = move |_| on_trigger()
        on:keydown = move |ev: ev::KeyboardEvent| {
          if &*ev.key() == "Enter" {
            // Otherwise the browser emits an additional click
            ev.prevent_default();
            on_trigger();
          }
        }
      >
        { move || label.get() }
      </button>
    }
}
