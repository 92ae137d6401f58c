#![feature(test)]
extern crate test;


mod tests {
    use test::Bencher;
    extern crate glif_neurons;
    use glif_neurons::neuron::{
        glif::{GlifNeuron, VoltageDynamicsMethod},
        iterate_and_spike::IterateAndSpike,
    };

    #[bench]
    fn bench_glif1(b: &mut Bencher) {
        let mut neuron = GlifNeuron::lif();

        b.iter(|| {
            neuron.iterate_and_spike(300.)
        })
    }

    #[bench]
    fn bench_glif5(b: &mut Bencher) {
        let mut neuron = GlifNeuron::lif_r_asc_a();

        b.iter(|| {
            neuron.iterate_and_spike(300.)
        })
    }

    #[bench]
    fn bench_glif5_exact(b: &mut Bencher) {
        let mut neuron = GlifNeuron::lif_r_asc_a();
        neuron.params.v_dynamics_method = VoltageDynamicsMethod::LinearExact;
        neuron.calibrate();

        b.iter(|| {
            neuron.iterate_and_spike(300.)
        })
    }
}
