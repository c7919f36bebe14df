use flowledger_shared::models::{FlowRecord, RecordStatus};
use i18nrs::yew::use_translation;
use yew::{Html, Properties, function_component, html};

use crate::format::format_amount;

/// Translation key for a record's status label.
pub(crate) fn status_key(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Done => "records.status.done",
        RecordStatus::Pending => "records.status.pending",
    }
}

/// Badge styling for a record's status.
pub(crate) fn status_class(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Done => "badge badge-success",
        RecordStatus::Pending => "badge badge-warning",
    }
}

/// Customer cell content: prefer the display name, fall back to the raw id.
pub(crate) fn customer_label(record: &FlowRecord) -> Option<String> {
    record
        .customer_name
        .clone()
        .or_else(|| record.customer_id.map(|id| id.to_string()))
}

#[derive(Properties, PartialEq)]
pub struct RecordsTableProps {
    pub records: Vec<FlowRecord>,
    /// The admin listing shows which customer each record belongs to.
    #[prop_or(false)]
    pub show_customer: bool,
    /// Translation key for the explicit no-records indicator.
    #[prop_or("records.empty")]
    pub empty_key: &'static str,
}

/// Table shared by the customer and admin record listings. An empty record
/// set renders a visible indicator, never a bare table.
#[function_component(RecordsTable)]
pub fn records_table(props: &RecordsTableProps) -> Html {
    let (i18n, ..) = use_translation();

    if props.records.is_empty() {
        return html! {
            <div class="alert alert-info">
                <span>{ i18n.t(props.empty_key) }</span>
            </div>
        };
    }

    let none_label = i18n.t("common.none");

    html! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        if props.show_customer {
                            <th>{ i18n.t("records.header.customer") }</th>
                        }
                        <th>{ i18n.t("records.header.date") }</th>
                        <th>{ i18n.t("records.header.amount") }</th>
                        <th>{ i18n.t("records.header.status") }</th>
                        <th>{ i18n.t("records.header.operator") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.records.iter().map(|record| html! {
                        <tr>
                            if props.show_customer {
                                <td>{ customer_label(record).unwrap_or_else(|| none_label.clone()) }</td>
                            }
                            <td>{ record.date.to_string() }</td>
                            <td>{ format!("¥{}", format_amount(record.amount)) }</td>
                            <td>
                                <span class={status_class(record.status)}>
                                    { i18n.t(status_key(record.status)) }
                                </span>
                            </td>
                            <td>{ record.operator.clone().unwrap_or_else(|| none_label.clone()) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(customer_id: Option<i64>, customer_name: Option<&str>) -> FlowRecord {
        FlowRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            amount: 500.0,
            status: RecordStatus::Pending,
            operator: None,
            customer_id,
            customer_name: customer_name.map(str::to_string),
        }
    }

    #[test]
    fn status_maps_to_label_key_and_badge() {
        assert_eq!(status_key(RecordStatus::Done), "records.status.done");
        assert_eq!(status_key(RecordStatus::Pending), "records.status.pending");
        assert!(status_class(RecordStatus::Done).contains("success"));
        assert!(status_class(RecordStatus::Pending).contains("warning"));
    }

    #[test]
    fn customer_label_prefers_name_over_id() {
        assert_eq!(
            customer_label(&record(Some(5), Some("张三"))).as_deref(),
            Some("张三")
        );
        assert_eq!(customer_label(&record(Some(5), None)).as_deref(), Some("5"));
        assert!(customer_label(&record(None, None)).is_none());
    }
}
