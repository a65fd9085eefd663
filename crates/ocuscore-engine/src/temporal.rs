/// Scale applied to symptom and inflammation points, by hours since surgery.
///
/// Early findings (< 24 h) are expected and weigh less; findings persisting
/// beyond a week weigh more.
pub fn temporal_multiplier(hours_since_surgery: f64) -> f64 {
    if hours_since_surgery < 24.0 {
        0.7
    } else if hours_since_surgery <= 72.0 {
        1.0
    } else if hours_since_surgery > 168.0 {
        1.2
    } else {
        1.0
    }
}
