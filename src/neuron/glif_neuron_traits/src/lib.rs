use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};


/// Derive macro to automatically implement the accessor traits a GLIF neuron
/// needs for the `IterateAndSpike` trait, including `CurrentVoltage`, `IsSpiking`,
/// `LastFiringTime`, and `GaussianFactor`, assuming the neuron stores its
/// membrane potential in a `state` struct and its noise parameters in
/// a `gaussian_params` field
#[proc_macro_derive(GlifNeuronBase)]
pub fn derive_glif_neuron_traits(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Get the name of the struct we are deriving the trait for
    let name = input.ident;

    // Generate the implementation of the trait
    let expanded = quote! {
        impl CurrentVoltage for #name {
            fn get_current_voltage(&self) -> f32 {
                self.state.v_m
            }
        }

        impl IsSpiking for #name {
            fn is_spiking(&self) -> bool {
                self.is_spiking
            }
        }

        impl LastFiringTime for #name {
            fn set_last_firing_time(&mut self, timestep: Option<usize>) {
                self.last_firing_time = timestep;
            }

            fn get_last_firing_time(&self) -> Option<usize> {
                self.last_firing_time
            }
        }

        impl GaussianFactor for #name {
            fn get_gaussian_factor(&self) -> f32 {
                crate::distribution::limited_distr(
                    self.gaussian_params.mean,
                    self.gaussian_params.std,
                    self.gaussian_params.min,
                    self.gaussian_params.max,
                )
            }
        }
    };

    TokenStream::from(expanded)
}
