use super::*;
use crate::autograd::grad_check::check_grad;
use crate::nn::layers::Neuron;
use crate::value::from_slice;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_structure() {
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = MLP::new(3, &[4, 4, 1], &mut rng);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.n_inputs(), 3);
    assert_eq!(mlp.n_outputs(), 1);
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.num_parameters(), 41);
    assert_eq!(mlp.children().len(), 3);
}

#[test]
fn test_mlp_parameters_stable_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let mlp = MLP::new(3, &[4, 4, 1], &mut rng);
    let first = mlp.parameters();
    let second = mlp.parameters();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.id(), b.id());
    }
}

#[test]
fn test_mlp_parameter_order_is_layer_neuron_weight_bias() {
    let mut rng = StdRng::seed_from_u64(9);
    let mlp = MLP::new(2, &[2, 1], &mut rng);
    let expected: Vec<&Parameter> = mlp
        .layers()
        .iter()
        .flat_map(|layer| layer.neurons())
        .flat_map(|neuron| neuron.weights().iter().chain(std::iter::once(neuron.bias())))
        .collect();
    assert_eq!(mlp.parameters(), expected);

    let names: Vec<String> = mlp.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "layers.0.neurons.0.weight.0",
            "layers.0.neurons.0.weight.1",
            "layers.0.neurons.0.bias",
            "layers.0.neurons.1.weight.0",
            "layers.0.neurons.1.weight.1",
            "layers.0.neurons.1.bias",
            "layers.1.neurons.0.weight.0",
            "layers.1.neurons.0.weight.1",
            "layers.1.neurons.0.bias",
        ]
    );
}

#[test]
fn test_mlp_seeded_construction_is_reproducible() {
    let a = MLP::new(3, &[4, 1], &mut StdRng::seed_from_u64(11));
    let b = MLP::new(3, &[4, 1], &mut StdRng::seed_from_u64(11));
    let xs = from_slice(&[2.0, 3.0, -1.0]);
    let out_a = a.forward_scalar(&xs).unwrap();
    let out_b = b.forward_scalar(&xs).unwrap();
    assert_eq!(out_a.data(), out_b.data());
    assert!(out_a.data() > -1.0 && out_a.data() < 1.0);
}

#[test]
fn test_mlp_forward_widths() {
    let mut rng = StdRng::seed_from_u64(2);
    let mlp = MLP::new(3, &[4, 2], &mut rng);
    let outputs = mlp.forward(&from_slice(&[0.5, -0.5, 1.0])).unwrap();
    assert_eq!(outputs.len(), 2);
    assert!(matches!(
        mlp.forward_scalar(&from_slice(&[0.5, -0.5, 1.0])),
        Err(MicroRustError::ShapeMismatch { expected: 1, actual: 2, .. })
    ));
    assert_eq!(
        mlp.forward(&from_slice(&[1.0])).err(),
        Some(MicroRustError::DimensionMismatch { expected: 3, actual: 1 })
    );
}

#[test]
fn test_mlp_from_layers_validation() {
    let hidden = Layer::from_neurons(vec![
        Neuron::from_weights(&[1.0, -1.0], 0.0, Activation::Tanh),
        Neuron::from_weights(&[0.5, 0.5], 0.1, Activation::Tanh),
    ])
    .unwrap();
    let output = Layer::from_neurons(vec![Neuron::from_weights(&[1.0, 1.0], 0.0, Activation::Linear)]).unwrap();
    let mlp = MLP::from_layers(vec![hidden.clone(), output]).unwrap();
    assert_eq!(mlp.n_inputs(), 2);
    assert_eq!(mlp.n_outputs(), 1);

    let bad_output = Layer::from_neurons(vec![Neuron::from_weights(&[1.0, 1.0, 1.0], 0.0, Activation::Linear)]).unwrap();
    assert_eq!(
        MLP::from_layers(vec![hidden, bad_output]).err(),
        Some(MicroRustError::DimensionMismatch { expected: 2, actual: 3 })
    );
    assert!(matches!(MLP::from_layers(Vec::new()), Err(MicroRustError::EmptyInput { .. })));
}

#[test]
fn test_mlp_input_gradients_match_finite_differences() {
    let mut rng = StdRng::seed_from_u64(21);
    let mlp = MLP::new(3, &[4, 4, 1], &mut rng);
    let inputs = from_slice(&[2.0, 3.0, -1.0]);
    check_grad(|v: &[Value]| mlp.forward_scalar(v), &inputs, 1e-6, 1e-4).unwrap();
}
