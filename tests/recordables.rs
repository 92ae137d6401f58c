#[cfg(test)]
mod test {
    use glif_neurons::error::{ConnectionError, GlifError};
    use glif_neurons::neuron::{
        glif::GlifNeuron,
        iterate_and_spike::IterateAndSpike,
    };

    #[test]
    fn test_registry_lists_observable_quantities() {
        assert_eq!(
            GlifNeuron::recordables(),
            vec!["V_m", "AScurrents_sum", "threshold", "I"]
        );
    }

    #[test]
    fn test_unsupported_target_is_rejected_at_connection_time() {
        let result = GlifNeuron::connect_recordable("w_value");

        assert!(matches!(
            result,
            Err(GlifError::ConnectionRelatedError(
                ConnectionError::UnsupportedRecordable(_)
            ))
        ));
        assert!(GlifNeuron::connect_recordable("V_m").is_ok());
    }

    #[test]
    fn test_connected_recordable_reads_live_values() {
        let read_voltage = GlifNeuron::connect_recordable("V_m").unwrap();
        let read_sum = GlifNeuron::connect_recordable("AScurrents_sum").unwrap();

        let mut neuron = GlifNeuron::lif_r_asc();
        let mut traces: Vec<(f32, f32)> = vec![];
        for _ in 0..200 {
            neuron.iterate_and_spike(300.);
            traces.push((read_voltage(&neuron), read_sum(&neuron)));
        }

        let (last_voltage, last_sum) = traces[traces.len() - 1];
        assert_eq!(last_voltage, neuron.state.v_m);
        assert_eq!(last_sum, neuron.state.ascurrents_sum);
        // the after-spike currents only appear once the neuron has fired
        assert!(traces.iter().any(|(_, sum)| *sum != 0.));
    }

    #[test]
    fn test_recordables_are_readable_by_name() {
        let mut neuron = GlifNeuron::lif();
        neuron.iterate_and_spike(100.);

        assert_eq!(neuron.get_recordable("V_m").unwrap(), neuron.state.v_m);
        assert_eq!(neuron.get_recordable("I").unwrap(), 100.);
        assert_eq!(
            neuron.get_recordable("threshold").unwrap(),
            neuron.params.th_inf
        );
        assert!(neuron.get_recordable("refractory_count").is_err());
    }
}
