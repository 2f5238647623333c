use leptos::*;

use wordfreq_core::{pipeline, view::HistogramView};
use wordfreq_frontend_api::TextApi;

mod components;
use components::*;

const DEFAULT_TEXT_URL: &str = "https://www.terriblytinytales.com/test.txt";
const TITLE: &str = "Word Frequency Histogram";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let histogram_view = RwSignal::new(HistogramView::new());
    let chart = create_memo(move |_| histogram_view.with(|v| v.chart().cloned()));
    let phase = Signal::derive(move || histogram_view.with(HistogramView::phase));
    let label = Signal::derive(move || histogram_view.with(HistogramView::trigger_label));
    let disabled = Signal::derive(move || histogram_view.with(HistogramView::trigger_disabled));

    // -- actions -- //

    let text_api = TextApi::new(DEFAULT_TEXT_URL);

    let create_histogram = Action::new(move |()| async move {
        let mut rng = rand::thread_rng();
        let outcome = pipeline::run(&text_api, &mut rng).await;
        histogram_view.update(|v| v.finish_run(outcome));
    });

    // -- callbacks -- //

    let on_trigger = move || {
        let mut started = false;
        histogram_view.update(|v| started = v.begin_run());
        if started {
            create_histogram.dispatch(());
        } else {
            log::debug!("Ignore trigger: histogram is already loading");
        }
    };

    view! {
      <div class="h-screen flex flex-col items-center justify-center mb-8 px-2 md:px-40">
        <h1 class="text-4xl font-bold text-center">{ TITLE }</h1>
        <TriggerButton phase label disabled on_trigger />
        { move || chart.get().map(|chart| view! {
            <div class="flex-grow w-full" aria-label="Histogram Chart">
              <Histogram chart />
            </div>
          })
        }
      </div>
    }
}
