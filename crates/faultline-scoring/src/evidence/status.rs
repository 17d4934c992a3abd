use faultline_core::models::{ItemStatus, Polarity};

/// Classify an item from the polarities of its in-window evidence.
///
/// No evidence → not triggered. Positive and negative evidence together →
/// contested. Anything else, including purely neutral evidence, → triggered.
pub fn classify(polarities: impl IntoIterator<Item = Polarity>) -> ItemStatus {
    let mut any = false;
    let mut positive = false;
    let mut negative = false;
    for p in polarities {
        any = true;
        match p {
            Polarity::Positive => positive = true,
            Polarity::Negative => negative = true,
            Polarity::Neutral => {}
        }
    }
    match (any, positive && negative) {
        (false, _) => ItemStatus::NotTriggered,
        (true, true) => ItemStatus::Contested,
        (true, false) => ItemStatus::Triggered,
    }
}
