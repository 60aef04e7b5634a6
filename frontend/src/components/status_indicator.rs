use common::i18n::Text;
use common::jobs::{Job, SubJobStatus};
use yew::prelude::*;

use crate::contexts::LanguageContext;

#[derive(Properties, PartialEq)]
pub struct StatusIndicatorProps {
    /// `None` until the submission has been accepted.
    pub job: Option<Job>,
}

/// Spinner plus the status of every sub-job while a generation runs.
#[function_component(StatusIndicator)]
pub fn status_indicator(props: &StatusIndicatorProps) -> Html {
    let Some(language) = use_context::<LanguageContext>() else {
        return html! {};
    };

    let headline = match &props.job {
        None => Text::StatusSubmitting,
        Some(_) => Text::StatusGenerating,
    };
    let sub_jobs = props.job.as_ref().map(|job| job.sub_jobs.as_slice()).unwrap_or_default();

    html! {
        <div class="status-indicator" aria-live="polite">
            <div class="spinner" />
            <p class="status-headline">{ language.t(headline) }</p>
            if !sub_jobs.is_empty() {
                <ul class="sub-jobs">
                    { for sub_jobs.iter().enumerate().map(|(index, sub_job)| {
                        let state = match sub_job.status {
                            SubJobStatus::Done => "done",
                            SubJobStatus::Failed => "failed",
                            SubJobStatus::InProgress(_) => "running",
                        };
                        html! {
                            <li class={classes!("sub-job", state)}>
                                <span class="sub-job-id">{ sub_job_label(index, &sub_job.uuid) }</span>
                                <span class="sub-job-status">{ sub_job.status.as_str() }</span>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}

/// First eight characters of the id, or the position when the service sent none.
fn sub_job_label(index: usize, uuid: &str) -> String {
    if uuid.is_empty() {
        return format!("#{}", index + 1);
    }
    uuid.get(..8).unwrap_or(uuid).to_string()
}

#[cfg(test)]
mod tests {
    use super::sub_job_label;

    #[test]
    fn ids_are_shortened_to_eight_chars() {
        assert_eq!(sub_job_label(0, "0123456789abcdef"), "01234567");
        assert_eq!(sub_job_label(0, "abc"), "abc");
    }

    #[test]
    fn missing_ids_fall_back_to_the_position() {
        assert_eq!(sub_job_label(2, ""), "#3");
    }
}
