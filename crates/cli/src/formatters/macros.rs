//! Macro for formatters that serialize results as-is.
//!
//! JSON and YAML output carry the full result structures, so every
//! `Formatter` method is a single call to the serializer.

/// Implement `Formatter` for `$formatter` by delegating every method to `$serialize`.
///
/// # Usage
/// ```ignore
/// impl_serde_formatter!(JsonFormatter, serde_json::to_string_pretty);
/// ```
macro_rules! impl_serde_formatter {
    ($formatter:ty, $serialize:path) => {
        impl $crate::formatters::Formatter for $formatter {
            fn format_serverclasses(&self, names: &[String]) -> anyhow::Result<String> {
                Ok($serialize(names)?)
            }

            fn format_apps(
                &self,
                apps: &[splunk_ds_client::DeploymentApp],
            ) -> anyhow::Result<String> {
                Ok($serialize(apps)?)
            }

            fn format_create(
                &self,
                outcome: &splunk_ds_client::CreateOutcome,
            ) -> anyhow::Result<String> {
                Ok($serialize(outcome)?)
            }

            fn format_add_host(
                &self,
                result: &splunk_ds_client::AddResult,
            ) -> anyhow::Result<String> {
                Ok($serialize(result)?)
            }

            fn format_bind(&self, result: &splunk_ds_client::BindResult) -> anyhow::Result<String> {
                Ok($serialize(result)?)
            }

            fn format_reload(
                &self,
                status: &splunk_ds_client::ReloadStatus,
            ) -> anyhow::Result<String> {
                Ok($serialize(status)?)
            }

            fn format_session(
                &self,
                session: &$crate::formatters::SessionOutput,
            ) -> anyhow::Result<String> {
                Ok($serialize(session)?)
            }

            fn format_batch_report(
                &self,
                report: &splunk_ds_client::BatchReport,
            ) -> anyhow::Result<String> {
                Ok($serialize(report)?)
            }

            fn format_inventory(
                &self,
                inventory: &splunk_ds_config::Inventory,
            ) -> anyhow::Result<String> {
                Ok($serialize(inventory)?)
            }
        }
    };
}

pub(crate) use impl_serde_formatter;
