//! Transient confirmation banner.

use gloo_timers::callback::Timeout;
use kindmap_types::Toast;
use yew::prelude::*;

/// How long a toast stays up.
const TOAST_DURATION_MS: u32 = 4_000;

/// Properties for ToastView component.
#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    /// Sequence number of this toast; a new number restarts the timer.
    pub seq: u32,
    pub toast: Toast,
    /// Receives `seq` back.
    pub on_dismiss: Callback<u32>,
}

/// Shows one toast and dismisses it after a delay or on click.
#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.seq, move |&seq| {
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(seq));
            // Dropping the handle cancels the timer when the toast changes.
            move || drop(timeout)
        });
    }

    let seq = props.seq;
    let onclick = props.on_dismiss.reform(move |_: MouseEvent| seq);

    html! {
        <div class="toast" role="status" {onclick}>
            <div class="toast-title">{ &props.toast.title }</div>
            <div class="toast-description">{ &props.toast.description }</div>
        </div>
    }
}
