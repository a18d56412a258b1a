use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use evbind::{BoxedTrigger, Callback, Molecule, Trigger};

#[derive(Debug)]
struct Saturated {
    bonds: usize,
}

impl fmt::Display for Saturated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "molecule saturated after {} bonds", self.bonds)
    }
}

impl std::error::Error for Saturated {}

// A throwaway dispatcher: the library leaves routing to its users.
struct Listeners {
    molecule: Vec<BoxedTrigger<Molecule>>,
}

impl Listeners {
    fn fire(&mut self, event: &Molecule) -> evbind::Result {
        for listener in &mut self.molecule {
            listener.trigger(event)?;
        }
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let reactions = Arc::new(AtomicUsize::new(0));
    let counter = reactions.clone();
    let mut bonds = 0;

    let mut listeners = Listeners {
        molecule: vec![
            Callback::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            })
            .boxed(),
            Callback::new(move || {
                bonds += 1;
                if bonds > 2 {
                    return Err(Saturated { bonds });
                }
                Ok(())
            })
            .boxed(),
        ],
    };

    for _ in 0..3 {
        let event = Molecule::new();
        if let Err(e) = listeners.fire(&event) {
            tracing::warn!(event = %event, error = %e, "listener failed");
        }
    }

    println!("reactions: {}", reactions.load(Ordering::Relaxed));
}
