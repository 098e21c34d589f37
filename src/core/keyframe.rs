//! Keyframe-Kurve: Zeit/Wert-Paare mit Ein- und Ausgangstangente.

use serde::{Deserialize, Serialize};

/// Fehler beim Aufbau einer Kurve aus externen Daten.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Zeitwerte müssen streng monoton steigen
    #[error("Key {index}: Zeit {time} liegt nicht nach {previous}")]
    NonIncreasingTime { index: usize, previous: f32, time: f32 },
    /// NaN oder unendliche Komponente
    #[error("Key {index} enthält einen nicht-endlichen Wert")]
    NonFinite { index: usize },
    /// Betrag einer Komponente über dem zulässigen Bereich für Daten von außen
    #[error("Key {index} liegt außerhalb von ±{limit}")]
    OutOfRange { index: usize, limit: f32 },
}

/// Größter zulässiger Betrag für Zeit und Wert externer Keys.
///
/// Hält Zeitdifferenzen und Henkel-Positionen in `curve_to_path` endlich.
pub const MAX_KEY_MAGNITUDE: f32 = 1.0e6;
/// Größter zulässiger Betrag einer Tangente externer Keys.
pub const MAX_TANGENT_MAGNITUDE: f32 = 1.0e12;

/// Ein Stützpunkt der Kurve.
///
/// `in_weight`/`out_weight` halten den zeitlichen Abstand des Bézier-Henkels
/// zum Anker, sofern die Kurve aus einem Pfad erzeugt wurde. Sie gehören zur
/// Editor-Sitzung und werden nicht serialisiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32, f32)", into = "(f32, f32, f32, f32)")]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
    /// Zeitabstand Anker → eingehender Henkel (positiv = Henkel liegt davor)
    pub in_weight: Option<f32>,
    /// Zeitabstand Anker → ausgehender Henkel (positiv = Henkel liegt danach)
    pub out_weight: Option<f32>,
}

impl Keyframe {
    /// Keyframe ohne gespeicherte Henkel-Abstände.
    pub fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
            in_weight: None,
            out_weight: None,
        }
    }

    /// Keyframe mit beiden Tangenten 0.
    pub fn flat(time: f32, value: f32) -> Self {
        Self::new(time, value, 0.0, 0.0)
    }

    fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.value.is_finite()
            && self.in_tangent.is_finite()
            && self.out_tangent.is_finite()
    }

    fn is_within_external_limits(&self) -> bool {
        self.time.abs() <= MAX_KEY_MAGNITUDE
            && self.value.abs() <= MAX_KEY_MAGNITUDE
            && self.in_tangent.abs() <= MAX_TANGENT_MAGNITUDE
            && self.out_tangent.abs() <= MAX_TANGENT_MAGNITUDE
    }
}

impl From<(f32, f32, f32, f32)> for Keyframe {
    fn from((time, value, in_tangent, out_tangent): (f32, f32, f32, f32)) -> Self {
        Self::new(time, value, in_tangent, out_tangent)
    }
}

impl From<Keyframe> for (f32, f32, f32, f32) {
    fn from(key: Keyframe) -> Self {
        (key.time, key.value, key.in_tangent, key.out_tangent)
    }
}

/// Geordnete Keyframe-Liste mit streng steigenden Zeiten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    /// Leere Kurve (kein Keyframe).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Baut eine Kurve aus intern erzeugten Keys.
    ///
    /// # Panics
    /// Bei nicht streng steigenden Zeiten oder nicht-endlichen Werten.
    pub fn new(keys: Vec<Keyframe>) -> Self {
        if let Err(e) = validate_keys(&keys) {
            panic!("ungültige Kurve: {e}");
        }
        Self { keys }
    }

    /// Fehlertolerante Variante für Daten von außen.
    ///
    /// Zusätzlich zur Ordnung werden die Beträge begrenzt
    /// ([`MAX_KEY_MAGNITUDE`], [`MAX_TANGENT_MAGNITUDE`]), damit die
    /// Konvertierung in einen Pfad nicht überläuft.
    pub fn try_from_keys(keys: Vec<Keyframe>) -> Result<Self, CurveError> {
        validate_keys(&keys)?;
        if let Some(index) = keys.iter().position(|k| !k.is_within_external_limits()) {
            return Err(CurveError::OutOfRange {
                index,
                limit: MAX_KEY_MAGNITUDE,
            });
        }
        Ok(Self { keys })
    }

    /// Gerade von `(t0, v0)` nach `(t1, v1)`; beide Tangenten = Steigung.
    pub fn linear(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
        let slope = if (t1 - t0).abs() > f32::EPSILON {
            (v1 - v0) / (t1 - t0)
        } else {
            0.0
        };
        Self::new(vec![
            Keyframe::new(t0, v0, 0.0, slope),
            Keyframe::new(t1, v1, slope, 0.0),
        ])
    }

    /// Weicher Übergang mit Tangenten 0 an beiden Enden.
    pub fn ease_in_out(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
        Self::new(vec![Keyframe::flat(t0, v0), Keyframe::flat(t1, v1)])
    }

    /// Konstanter Wert über `[t0, t1]`.
    pub fn constant(t0: f32, t1: f32, value: f32) -> Self {
        Self::new(vec![Keyframe::flat(t0, value), Keyframe::flat(t1, value)])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn key(&self, index: usize) -> Option<&Keyframe> {
        self.keys.get(index)
    }

    /// Zeitbereich `(erste, letzte)` oder `None` bei leerer Kurve.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        Some((self.keys.first()?.time, self.keys.last()?.time))
    }

    /// Index des Segments, das `time` enthält (Zeiten außerhalb werden geklemmt).
    pub fn segment_index_at(&self, time: f32) -> Option<usize> {
        if self.keys.len() < 2 {
            return None;
        }
        let after = self.keys.partition_point(|k| k.time <= time);
        Some(after.clamp(1, self.keys.len() - 1) - 1)
    }

    /// Wertet die Kurve per kubischer Hermite-Interpolation aus.
    ///
    /// Außerhalb des Key-Bereichs wird der Randwert gehalten, eine leere
    /// Kurve liefert 0.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }
        let Some(segment) = self.segment_index_at(time) else {
            return first.value;
        };
        let a = &self.keys[segment];
        let b = &self.keys[segment + 1];
        let dt = b.time - a.time;
        let s = (time - a.time) / dt;
        hermite(a.value, a.out_tangent * dt, b.value, b.in_tangent * dt, s)
    }
}

/// Kubisches Hermite-Polynom im Einheitsintervall.
fn hermite(p0: f32, m0: f32, p1: f32, m1: f32, s: f32) -> f32 {
    let s2 = s * s;
    let s3 = s2 * s;
    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;
    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

fn validate_keys(keys: &[Keyframe]) -> Result<(), CurveError> {
    for (index, key) in keys.iter().enumerate() {
        if !key.is_finite() {
            return Err(CurveError::NonFinite { index });
        }
        if index > 0 {
            let previous = keys[index - 1].time;
            if key.time <= previous {
                return Err(CurveError::NonIncreasingTime {
                    index,
                    previous,
                    time: key.time,
                });
            }
        }
    }
    Ok(())
}

impl TryFrom<Vec<Keyframe>> for Curve {
    type Error = CurveError;

    fn try_from(keys: Vec<Keyframe>) -> Result<Self, Self::Error> {
        Self::try_from_keys(keys)
    }
}

impl From<Curve> for Vec<Keyframe> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}
