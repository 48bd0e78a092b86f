/// Edit-mode state for a form: a draft copied from the record on entry,
/// changed in place, then either committed or thrown away.
///
/// `K` addresses the record being edited (a row index for lists, `()` for a
/// single record).
#[derive(Debug, Clone)]
pub struct Draft<K, F> {
    active: Option<(K, F)>,
}

impl<K, F> Default for Draft<K, F> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<K: Copy + PartialEq, F> Draft<K, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts editing `key`, replacing any draft already open.
    pub fn begin(&mut self, key: K, form: F) {
        self.active = Some((key, form));
    }

    pub fn is_editing(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_editing_key(&self, key: K) -> bool {
        self.key() == Some(key)
    }

    pub fn key(&self) -> Option<K> {
        self.active.as_ref().map(|(key, _)| *key)
    }

    pub fn form(&self) -> Option<&F> {
        self.active.as_ref().map(|(_, form)| form)
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        self.active.as_mut().map(|(_, form)| form)
    }

    pub fn cancel(&mut self) -> Option<F> {
        self.active.take().map(|(_, form)| form)
    }

    pub fn finish(&mut self) -> Option<(K, F)> {
        self.active.take()
    }
}
