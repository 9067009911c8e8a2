//! Navigation collaborator
//!
//! Whatever owns the wizard decides where "go to dashboard" leads.

/// Receives the single exit action of the success screen
pub trait Navigator {
    fn go_to_dashboard(&mut self);
}

impl<F: FnMut()> Navigator for F {
    fn go_to_dashboard(&mut self) {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        visits: u32,
    }

    impl Navigator for Recorder {
        fn go_to_dashboard(&mut self) {
            self.visits += 1;
        }
    }

    #[test]
    fn test_struct_navigator() {
        let mut recorder = Recorder { visits: 0 };
        let nav: &mut dyn Navigator = &mut recorder;
        nav.go_to_dashboard();
        assert_eq!(recorder.visits, 1);
    }

    #[test]
    fn test_closure_navigator() {
        let mut hit = false;
        (|| hit = true).go_to_dashboard();
        assert!(hit);
    }
}
