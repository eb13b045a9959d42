//! Export buttons and the feedback shown on them.

/// Texts shown on the export controls.
///
/// Defaults are the Portuguese labels of the standard receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub upload_idle: String,
    pub save_idle: String,
    pub generating: String,
    pub uploading: String,
    pub saved_locally: String,
    pub uploaded: String,
    pub upload_rejected: String,
    pub connection_failed: String,
    /// Alert prefix; the endpoint's response text is appended.
    pub upload_rejected_alert: String,
    pub connection_failed_alert: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            upload_idle: "Exportar para PDF e Salvar no Drive".to_string(),
            save_idle: "Salvar PDF Localmente".to_string(),
            generating: "Gerando PDF...".to_string(),
            uploading: "Enviando para o Drive... ⏳".to_string(),
            saved_locally: "✅ Download Concluído".to_string(),
            uploaded: "✅ Salvo no Drive!".to_string(),
            upload_rejected: "❌ Erro no Upload.".to_string(),
            connection_failed: "❌ Erro de Conexão.".to_string(),
            upload_rejected_alert: "❌ Erro no upload! Verifique o console ou o Apps Script: "
                .to_string(),
            connection_failed_alert: "❌ Erro de conexão ou script.".to_string(),
        }
    }
}

/// A push button: a label and an enabled flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    enabled: bool,
}

impl Button {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

/// The two export buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    /// "Export and upload" button.
    pub upload: Button,
    /// "Save locally" button.
    pub save: Button,
}

impl Controls {
    pub(crate) fn new(labels: &Labels) -> Self {
        Self {
            upload: Button::new(&labels.upload_idle),
            save: Button::new(&labels.save_idle),
        }
    }

    /// Whether an export can be triggered.
    pub fn is_enabled(&self) -> bool {
        self.upload.enabled && self.save.enabled
    }

    pub(crate) fn disable(&mut self) {
        self.upload.enabled = false;
        self.save.enabled = false;
    }

    /// Re-enable both buttons and reset their labels.
    pub(crate) fn restore(&mut self, labels: &Labels) {
        *self = Self::new(labels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_resets_labels_and_enables() {
        let labels = Labels::default();
        let mut controls = Controls::new(&labels);
        controls.disable();
        controls.upload.set_label(&labels.uploaded);
        assert!(!controls.is_enabled());

        controls.restore(&labels);
        assert!(controls.is_enabled());
        assert_eq!(controls.upload.label(), "Exportar para PDF e Salvar no Drive");
        assert_eq!(controls.save.label(), "Salvar PDF Localmente");
    }
}
