/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Größe der Zeichenfläche in Pixeln
    pub surface_size: [f32; 2],
    /// Signalisiert, dass der nächste Frame neu gezeichnet werden muss
    pub dirty: bool,
}

impl ViewState {
    /// Erstellt den Startzustand; der erste Frame wird immer gezeichnet.
    pub fn new(surface_size: [f32; 2]) -> Self {
        Self {
            surface_size,
            dirty: true,
        }
    }

    /// Fordert ein Neuzeichnen im nächsten Frame an.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new([0.0, 0.0])
    }
}
