//! Zentrale Konfiguration für den Parallelogramm-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::surface::{Rgba, StrokeStyle};
use serde::{Deserialize, Serialize};

// ── Punkte ──────────────────────────────────────────────────────────

/// Radius eines Steuerpunkts in Pixeln.
pub const POINT_RADIUS: f32 = 5.5;
/// Füllfarbe per Doppelklick gesetzter Punkte (RGBA: #8B0000).
pub const POINT_COLOR_PLACED: Rgba = [0.545, 0.0, 0.0, 1.0];
/// Füllfarbe des berechneten vierten Punkts (RGBA: Grau).
pub const POINT_COLOR_DERIVED: Rgba = [0.502, 0.502, 0.502, 1.0];

// ── Beschriftung ────────────────────────────────────────────────────

/// Schriftgröße der Koordinaten-Beschriftung.
pub const LABEL_FONT_SIZE: f32 = 10.0;
/// Farbe der Koordinaten-Beschriftung (RGBA: Schwarz).
pub const LABEL_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
/// Versatz der Beschriftung nach links oben in Pixeln.
pub const LABEL_OFFSET: f32 = 15.0;
/// Schriftgröße des Platzhaltertexts bei leerer Fläche.
pub const PLACEHOLDER_FONT_SIZE: f32 = 16.0;
/// Platzhaltertext bei leerer Fläche.
pub const PLACEHOLDER_TEXT: &str = "Double click to create a point";

// ── Overlays ────────────────────────────────────────────────────────

/// Farbe des Selektionsrings (RGBA: Gold).
pub const SELECTION_COLOR: Rgba = [1.0, 0.843, 0.0, 1.0];
/// Linienbreite des Selektionsrings.
pub const SELECTION_WIDTH: f32 = 2.0;
/// Farbe der Parallelogramm-Kanten (RGBA: #3575D2).
pub const OUTLINE_COLOR: Rgba = [0.208, 0.459, 0.824, 1.0];
/// Linienbreite der Parallelogramm-Kanten.
pub const OUTLINE_WIDTH: f32 = 2.0;
/// Farbe der eingeschriebenen Kurve (RGBA: Gold).
pub const CURVE_COLOR: Rgba = [1.0, 0.843, 0.0, 1.0];
/// Linienbreite der eingeschriebenen Kurve.
pub const CURVE_WIDTH: f32 = 1.0;
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Stil der Koordinaten-Beschriftung eines Punkts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    /// Schriftgröße
    pub font_size: f32,
    /// Schriftfarbe
    pub color: Rgba,
    /// Versatz nach links oben
    pub offset: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: LABEL_FONT_SIZE,
            color: LABEL_COLOR,
            offset: LABEL_OFFSET,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `parallelogram_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Radius neuer Punkte in Pixeln
    pub point_radius: f32,
    /// Füllfarbe gesetzter Punkte
    pub point_color_placed: Rgba,
    /// Füllfarbe des berechneten vierten Punkts
    pub point_color_derived: Rgba,

    // ── Beschriftung ────────────────────────────────────────────
    /// Schriftgröße der Koordinaten-Beschriftung
    pub label_font_size: f32,
    /// Farbe der Koordinaten-Beschriftung
    pub label_color: Rgba,
    /// Schriftgröße des Platzhaltertexts
    pub placeholder_font_size: f32,

    // ── Overlays ────────────────────────────────────────────────
    /// Farbe des Selektionsrings
    pub selection_color: Rgba,
    /// Linienbreite des Selektionsrings
    pub selection_width: f32,
    /// Farbe der Parallelogramm-Kanten
    pub outline_color: Rgba,
    /// Linienbreite der Parallelogramm-Kanten
    pub outline_width: f32,
    /// Farbe der eingeschriebenen Kurve
    pub curve_color: Rgba,
    /// Linienbreite der eingeschriebenen Kurve
    pub curve_width: f32,
    /// Hintergrundfarbe der Zeichenfläche
    #[serde(default = "default_background_color")]
    pub background_color: Rgba,

    // ── Startzustand der Schalter ───────────────────────────────
    /// Kanten beim Start anzeigen
    #[serde(default = "default_true")]
    pub show_outline: bool,
    /// Eingeschriebene Kurve beim Start anzeigen
    #[serde(default = "default_true")]
    pub show_inscribed_curve: bool,
    /// Vierten Punkt beim Start an die anderen drei koppeln
    #[serde(default = "default_true")]
    pub lock_fourth_point: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            point_color_placed: POINT_COLOR_PLACED,
            point_color_derived: POINT_COLOR_DERIVED,

            label_font_size: LABEL_FONT_SIZE,
            label_color: LABEL_COLOR,
            placeholder_font_size: PLACEHOLDER_FONT_SIZE,

            selection_color: SELECTION_COLOR,
            selection_width: SELECTION_WIDTH,
            outline_color: OUTLINE_COLOR,
            outline_width: OUTLINE_WIDTH,
            curve_color: CURVE_COLOR,
            curve_width: CURVE_WIDTH,
            background_color: BACKGROUND_COLOR,

            show_outline: true,
            show_inscribed_curve: true,
            lock_fourth_point: true,
        }
    }
}

/// Serde-Default für `background_color` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_background_color() -> Rgba {
    BACKGROUND_COLOR
}

fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Lädt Optionen und legt beim ersten Start eine Datei mit Standardwerten an.
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }

        let options = Self::default();
        if let Err(e) = options.save_to_file(path) {
            log::warn!("Optionen-Datei konnte nicht angelegt werden: {:#}", e);
        }
        options
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("parallelogram_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("parallelogram_editor.toml")
    }

    /// Stil der Koordinaten-Beschriftung.
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            font_size: self.label_font_size,
            color: self.label_color,
            offset: LABEL_OFFSET,
        }
    }

    /// Linienstil des Selektionsrings.
    pub fn selection_stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.selection_width, self.selection_color)
    }

    /// Linienstil der Parallelogramm-Kanten.
    pub fn outline_stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.outline_width, self.outline_color)
    }

    /// Linienstil der eingeschriebenen Kurve.
    pub fn curve_stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.curve_width, self.curve_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_options_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "parallelogram_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn save_and_load_roundtrip_keeps_values() {
        let path = temp_options_path("roundtrip");
        let mut options = EditorOptions::default();
        options.point_radius = 8.0;
        options.lock_fourth_point = false;

        options.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = temp_options_path("broken");
        std::fs::write(&path, "point_radius = \"gross\"").expect("Schreiben sollte klappen");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn load_or_create_writes_defaults_on_first_start() {
        let path = temp_options_path("first_start");
        let _ = std::fs::remove_file(&path);

        let options = EditorOptions::load_or_create(&path);
        let created = path.exists();
        let _ = std::fs::remove_file(&path);

        assert!(created);
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn missing_toggle_fields_default_to_enabled() {
        let mut content = toml::to_string_pretty(&EditorOptions::default())
            .expect("Serialisierung sollte klappen");
        content = content
            .lines()
            .filter(|line| !line.starts_with("show_") && !line.starts_with("lock_"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: EditorOptions = toml::from_str(&content).expect("Parsen sollte klappen");

        assert!(parsed.show_outline);
        assert!(parsed.show_inscribed_curve);
        assert!(parsed.lock_fourth_point);
    }
}
