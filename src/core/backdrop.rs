/// Shared page background driven by whichever `[data-bg-color]` section sits
/// in the central band of the viewport.
#[derive(Clone, Debug, Default)]
pub struct Backdrop {
    color: Option<String>,
    owner: Option<usize>,
    blob_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackdropChange {
    /// Write `color` to the layer and the `--blob-color` property, then
    /// restart the blob animation.
    Recolor { color: String },
    /// Same color came back after the blob went out; restart the blob only.
    ActivateBlob,
    /// The owning section left the band.
    DeactivateBlob,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn blob_active(&self) -> bool {
        self.blob_active
    }

    /// Section `section` entered the band. Same color as the active one
    /// never rewrites the color; it only brings back a deactivated blob.
    pub fn enter(&mut self, section: usize, color: &str) -> Option<BackdropChange> {
        let color = color.trim();
        if color.is_empty() {
            return None;
        }
        if self.color.as_deref() == Some(color) {
            self.owner = Some(section);
            if self.blob_active {
                return None;
            }
            self.blob_active = true;
            return Some(BackdropChange::ActivateBlob);
        }
        self.color = Some(color.to_string());
        self.owner = Some(section);
        self.blob_active = true;
        Some(BackdropChange::Recolor {
            color: color.to_string(),
        })
    }

    /// Section `section` left the band. Only the owner deactivates the blob;
    /// the color is kept until another section takes over.
    pub fn exit(&mut self, section: usize) -> Option<BackdropChange> {
        if self.owner != Some(section) || !self.blob_active {
            return None;
        }
        self.owner = None;
        self.blob_active = false;
        Some(BackdropChange::DeactivateBlob)
    }
}
