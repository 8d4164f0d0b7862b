//! # Exemple d'Entraînement d'un MLP Scalaire
//!
//! Entraîne un `Mlp(3, [4, 4, 1])` sur quatre points étiquetés avec une
//! perte MSE et une descente de gradient (`Sgd`).
//!
//! ## Fonctionnalités Démontrées:
//! 1.  Initialisation reproductible des paramètres via un `StdRng` à graine fixe.
//! 2.  Boucle d'entraînement: `forward`, `MseLoss::calculate`, `backward`, `step`.
//! 3.  Gestion de la bande (`Tape::mark` / `Tape::rewind`) entre les itérations.
//!
//! ## Exécution
//! `RUST_LOG=info cargo run --example train_mlp`

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalarflow_core::nn::{Mlp, Module, MseLoss, Reduction};
use scalarflow_core::optim::{Optimizer, Sgd};
use scalarflow_core::{ScalarFlowError, Tape, Var};

const EPOCHS: usize = 100;

fn main() -> Result<(), ScalarFlowError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let tape = Tape::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(&tape, 3, &[4, 4, 1], &mut rng);
    let params = mlp.parameters();
    info!("Mlp créé: {} paramètres", params.len());

    let loss_fn = MseLoss::new(Reduction::Mean);
    let mut optimizer = Sgd::new(0.05);

    // Tout ce qui est enregistré après ce point est temporaire.
    let mark = tape.mark();
    for epoch in 0..EPOCHS {
        let mut predictions: Vec<Var> = Vec::with_capacity(xs.len());
        for x in &xs {
            predictions.extend(mlp.forward(x)?.into_vec());
        }
        let loss = loss_fn.calculate(&predictions, &ys)?;

        mlp.zero_grad();
        loss.backward()?;
        optimizer.step(&params);

        if epoch % 10 == 0 || epoch == EPOCHS - 1 {
            info!("Epoch [{}/{}], Loss: {:.6}", epoch + 1, EPOCHS, loss.data());
        }
        if !loss.data().is_finite() {
            warn!("Loss diverged at epoch {}", epoch + 1);
            break;
        }
        tape.rewind(mark);
    }

    for (x, y) in xs.iter().zip(ys) {
        let prediction = mlp.forward(x)?.into_vec();
        info!("x = {:?}, target = {}, prediction = {:.4}", x, y, prediction[0].data());
    }
    tape.rewind(mark);
    Ok(())
}
