#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use glif_neurons::error::{GlifError, ParameterError, StatusError};
    use glif_neurons::neuron::glif::{GlifModel, GlifNeuron, VoltageDynamicsMethod};
    use glif_neurons::status::{names, StatusDictionary, StatusValue};

    #[test]
    fn test_model_aliases_resolve_to_levels() {
        let aliases = [
            ("lif", GlifModel::Lif),
            ("glif_lif", GlifModel::Lif),
            ("1", GlifModel::Lif),
            ("lif_r", GlifModel::LifR),
            ("glif_lif_r", GlifModel::LifR),
            ("2", GlifModel::LifR),
            ("lif_asc", GlifModel::LifAsc),
            ("glif_lif_asc", GlifModel::LifAsc),
            ("3", GlifModel::LifAsc),
            ("lif_r_asc", GlifModel::LifRAsc),
            ("glif_lif_r_asc", GlifModel::LifRAsc),
            ("4", GlifModel::LifRAsc),
            ("lif_r_asc_a", GlifModel::LifRAscA),
            ("glif_lif_r_asc_a", GlifModel::LifRAscA),
            ("5", GlifModel::LifRAscA),
        ];

        for (alias, expected) in aliases {
            assert_eq!(GlifModel::parse(alias).unwrap(), expected);
            assert_eq!(
                GlifModel::from_level(expected.level() as i64).unwrap(),
                expected
            );
        }

        assert!(matches!(
            GlifModel::parse("glif_6"),
            Err(GlifError::ParameterRelatedError(ParameterError::InvalidModelType(_)))
        ));
        assert!(GlifModel::from_level(0).is_err());
        assert!(GlifModel::from_level(6).is_err());
    }

    #[test]
    fn test_set_status_switches_model_by_alias() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(
            names::GLIF_MODEL.to_string(),
            StatusValue::Text("lif".to_string()),
        );
        for key in [names::ASC_INIT, names::K, names::ASC_AMPS, names::R] {
            config.insert(key.to_string(), StatusValue::FloatArray(vec![]));
        }
        neuron.set_status(&config).unwrap();

        assert_eq!(neuron.params.glif_model, GlifModel::Lif);
        assert_eq!(neuron.variables.model, GlifModel::Lif);
        // dropping the channels also restarts the stored currents
        assert!(neuron.state.ascurrents.is_empty());
        assert_eq!(neuron.state.ascurrents_sum, 0.);
    }

    #[test]
    fn test_set_status_accepts_numeric_model_level() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(names::GLIF_MODEL.to_string(), StatusValue::Integer(3));
        neuron.set_status(&config).unwrap();

        assert_eq!(neuron.params.glif_model, GlifModel::LifAsc);
    }

    #[test]
    fn test_switching_to_model_without_channels_requires_clearing_them() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(
            names::GLIF_MODEL.to_string(),
            StatusValue::Text("lif_r".to_string()),
        );
        let result = neuron.set_status(&config);

        assert!(matches!(
            result,
            Err(GlifError::ParameterRelatedError(
                ParameterError::UnexpectedAfterSpikeChannels
            ))
        ));
        assert_eq!(neuron.params.glif_model, GlifModel::LifRAscA);
    }

    #[test]
    fn test_invalid_update_leaves_committed_values_untouched() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(names::G.to_string(), StatusValue::Float(12.));
        config.insert(names::T_REF.to_string(), StatusValue::Float(-1.));
        let result = neuron.set_status(&config);

        assert!(matches!(
            result,
            Err(GlifError::ParameterRelatedError(
                ParameterError::NegativeRefractoryPeriod
            ))
        ));
        assert_eq!(neuron.params.g, 9.43);
        assert_eq!(neuron.params.t_ref, 0.5);
    }

    #[test]
    fn test_updating_one_channel_vector_alone_is_rejected() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(
            names::ASC_INIT.to_string(),
            StatusValue::FloatArray(vec![1., 2., 3.]),
        );
        let result = neuron.set_status(&config);

        assert!(matches!(
            result,
            Err(GlifError::ParameterRelatedError(
                ParameterError::MismatchedAfterSpikeVectors
            ))
        ));
        assert_eq!(neuron.params.asc_init, vec![0., 0.]);
    }

    #[test]
    fn test_updating_all_channel_vectors_together_is_committed() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(
            names::ASC_INIT.to_string(),
            StatusValue::FloatArray(vec![1., 2., 3.]),
        );
        config.insert(
            names::K.to_string(),
            StatusValue::FloatArray(vec![0.1, 0.2, 0.3]),
        );
        config.insert(
            names::ASC_AMPS.to_string(),
            StatusValue::FloatArray(vec![-5., -10., -15.]),
        );
        config.insert(
            names::R.to_string(),
            StatusValue::FloatArray(vec![1., 1., 1.]),
        );
        neuron.set_status(&config).unwrap();

        assert_eq!(neuron.params.asc_init, vec![1., 2., 3.]);
        // stored currents restart from the new initial values
        assert_eq!(neuron.state.ascurrents, vec![1., 2., 3.]);
        assert_eq!(neuron.state.ascurrents_sum, 6.);
    }

    #[test]
    fn test_unknown_dynamics_method_is_rejected() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(
            names::V_DYNAMICS_METHOD.to_string(),
            StatusValue::Text("rk4".to_string()),
        );

        assert!(matches!(
            neuron.set_status(&config),
            Err(GlifError::ParameterRelatedError(
                ParameterError::InvalidDynamicsMethod(_)
            ))
        ));
    }

    #[test]
    fn test_dynamics_method_update_is_applied_at_calibration() {
        let mut neuron = GlifNeuron::default();
        assert_eq!(
            neuron.variables.method,
            VoltageDynamicsMethod::LinearForwardEuler
        );

        let mut config = StatusDictionary::new();
        config.insert(
            names::V_DYNAMICS_METHOD.to_string(),
            StatusValue::Text("linear_exact".to_string()),
        );
        neuron.set_status(&config).unwrap();

        assert_eq!(neuron.params.v_dynamics_method, VoltageDynamicsMethod::LinearExact);
        assert_eq!(neuron.variables.method, VoltageDynamicsMethod::LinearExact);
    }

    #[test]
    fn test_non_finite_and_non_positive_constants_are_rejected() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(names::G.to_string(), StatusValue::Float(f32::NAN));
        assert!(matches!(
            neuron.set_status(&config),
            Err(GlifError::ParameterRelatedError(
                ParameterError::NonPositiveConductance
            ))
        ));

        let mut config = StatusDictionary::new();
        config.insert(names::C_M.to_string(), StatusValue::Float(-5.));
        assert!(matches!(
            neuron.set_status(&config),
            Err(GlifError::ParameterRelatedError(
                ParameterError::NonPositiveCapacitance
            ))
        ));

        let mut config = StatusDictionary::new();
        config.insert(names::TH_INF.to_string(), StatusValue::Float(f32::INFINITY));
        assert!(matches!(
            neuron.set_status(&config),
            Err(GlifError::ParameterRelatedError(
                ParameterError::NonFiniteValue(_)
            ))
        ));
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(
            names::V_M.to_string(),
            StatusValue::Text("negative seventy".to_string()),
        );

        assert!(matches!(
            neuron.set_status(&config),
            Err(GlifError::StatusRelatedError(StatusError::TypeMismatch(_)))
        ));
    }

    #[test]
    fn test_integer_values_widen_to_floats() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(names::T_REF.to_string(), StatusValue::Integer(1));
        neuron.set_status(&config).unwrap();

        assert_eq!(neuron.params.t_ref, 1.);
    }

    #[test]
    fn test_state_values_are_settable_by_name() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(names::V_M.to_string(), StatusValue::Float(-12.));
        config.insert(names::THRESHOLD.to_string(), StatusValue::Float(30.));
        config.insert(
            names::ASCURRENTS.to_string(),
            StatusValue::FloatArray(vec![2., 3.]),
        );
        neuron.set_status(&config).unwrap();

        assert_eq!(neuron.state.v_m, -12.);
        assert_eq!(neuron.state.threshold, 30.);
        assert_eq!(neuron.state.ascurrents_sum, 5.);
    }

    #[test]
    fn test_state_vector_with_wrong_length_is_rejected() {
        let mut neuron = GlifNeuron::default();

        let mut config = StatusDictionary::new();
        config.insert(
            names::ASCURRENTS.to_string(),
            StatusValue::FloatArray(vec![2., 3., 4.]),
        );

        assert!(matches!(
            neuron.set_status(&config),
            Err(GlifError::ParameterRelatedError(
                ParameterError::MismatchedAfterSpikeVectors
            ))
        ));
    }

    #[test]
    fn test_status_roundtrip_reproduces_configuration() {
        let mut original = GlifNeuron::lif_r();
        let mut config = StatusDictionary::new();
        config.insert(names::TH_INF.to_string(), StatusValue::Float(30.));
        config.insert(names::A_SPIKE.to_string(), StatusValue::Float(0.5));
        config.insert(names::V_M.to_string(), StatusValue::Float(-3.));
        original.set_status(&config).unwrap();

        let reported = original.get_status();
        assert_eq!(reported.get(names::TH_INF), Some(&StatusValue::Float(30.)));
        assert!(matches!(
            reported.get(names::RECORDABLES),
            Some(StatusValue::TextArray(_))
        ));

        let mut copy = GlifNeuron::default();
        copy.set_status(&reported).unwrap();

        assert_eq!(copy.params.glif_model, GlifModel::LifR);
        assert_eq!(copy.params.th_inf, 30.);
        assert_eq!(copy.params.a_spike, 0.5);
        assert_eq!(copy.state.v_m, -3.);
        assert!(copy.state.ascurrents.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut neuron = GlifNeuron::default();

        let mut config: StatusDictionary = HashMap::new();
        config.insert("synapse_count".to_string(), StatusValue::Integer(12));
        neuron.set_status(&config).unwrap();

        assert_eq!(neuron.params.g, 9.43);
    }
}
