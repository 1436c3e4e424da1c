//! Outbound payload handed to the widget boundary

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

use crate::config::ActionSpec;
use crate::config::Scroll;
use crate::config::SelectMode;
use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::model::Dataset;
use crate::model::Row;
use crate::result::InteractionResult;

/// Everything the widget needs to render one table.
///
/// Field names and order are the widget's argument names. Building the same
/// dataset and config with the same nonce always yields identical bytes from
/// [`Payload::to_json_bytes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub columns: Vec<String>,
    pub data: Vec<Row>,
    pub id_col: String,
    #[serde(rename = "pageLength")]
    pub page_length: u32,
    #[serde(rename = "lengthMenu")]
    pub length_menu: Vec<u32>,
    pub orderable: Vec<String>,
    pub hidden: Vec<String>,
    pub searchable: Vec<String>,
    pub select: SelectMode,
    #[serde(rename = "scrollX")]
    pub scroll_x: Scroll,
    #[serde(rename = "scrollY")]
    pub scroll_y: Scroll,
    #[serde(rename = "deferRender")]
    pub defer_render: bool,
    pub layout: Option<serde_json::Value>,
    pub actions: Option<ActionSpec>,
    pub key: Option<String>,
    /// Value reported before any interaction.
    pub default: InteractionResult,
    /// Reset generation for keyed widgets, `None` for keyless ones.
    pub reset_nonce: Option<u64>,
}

impl Payload {
    /// Validates the inputs and builds a payload.
    ///
    /// Fails before building anything if the dataset is absent or the
    /// config does not fit it.
    pub fn build(
        dataset: Option<&Dataset>,
        config: &TableConfig,
        reset_nonce: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let dataset = dataset.ok_or(ConfigError::MissingDataset)?;
        config.validate(dataset)?;

        Ok(Self {
            columns: dataset.columns().to_vec(),
            data: dataset.rows().to_vec(),
            id_col: config.id_col.clone(),
            page_length: config.page_length,
            length_menu: config.length_menu.clone(),
            orderable: config.orderable_cols.clone(),
            hidden: config.hidden_cols.clone(),
            searchable: config.searchable_cols.clone(),
            select: config.select,
            scroll_x: config.scroll_x.clone(),
            scroll_y: config.scroll_y.clone(),
            defer_render: config.defer_render,
            layout: config.layout.clone(),
            actions: config.actions.clone(),
            key: config.widget_key().map(str::to_string),
            default: InteractionResult::Idle,
            reset_nonce,
        })
    }

    /// Serializes the payload to compact JSON.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Serializes the payload to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns the identity the widget is tracked under.
    ///
    /// Keyed widgets use their key. Keyless widgets are identified by a
    /// digest of the payload, so changing any argument makes them a new
    /// widget.
    pub fn identity(&self) -> Result<String, serde_json::Error> {
        if let Some(key) = &self.key {
            return Ok(key.clone());
        }
        let digest = Sha256::digest(self.to_json_bytes()?);
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        Ok(format!("__anonymous_{hex}"))
    }
}
