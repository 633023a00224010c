use std::io::{BufRead, Write};

use clap::{Parser, builder::RangedU64ValueParser};

use crate::{
    cli::DistanceUnit,
    core::{DrivingScenario, Environment, Estimate},
    input::{self, DrivingConditions, SelectedVehicle, SystemParameters},
    prelude::*,
    prompt::{DEFAULT_MAX_ATTEMPTS, Prompter},
    tables::build_estimate_table,
};

const RULE: &str = "==================================================";

#[derive(Clone, Parser)]
pub struct InteractiveArgs {
    /// How many times to ask the same question before giving up.
    #[clap(
        long = "max-attempts",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        env = "MAX_ATTEMPTS",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    pub max_attempts: usize,

    /// Distance unit for the printed range.
    #[clap(long = "unit", value_enum, default_value_t, env = "DISTANCE_UNIT")]
    pub unit: DistanceUnit,
}

/// Menu-driven session over arbitrary input and output streams.
pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    environment: &'a Environment,
    unit: DistanceUnit,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub const fn new(args: &InteractiveArgs, environment: &'a Environment, input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output, args.max_attempts),
            environment,
            unit: args.unit,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.prompter.into_output()
    }

    pub fn run(&mut self) -> Result {
        self.banner("EV Range Estimator")?;
        self.prompter.say("Estimates the driving range of an electric vehicle at a constant speed.")?;
        self.prompter.say("")?;
        let mut n_calculations = 0_usize;
        loop {
            self.run_once()?;
            n_calculations += 1;
            if !self.prompter.confirm("Do you want to run another calculation (yes/no): ")? {
                break;
            }
            self.prompter.say("")?;
        }
        info!(n_calculations, "finished");
        self.prompter.say("")?;
        self.prompter.say("Thank you for using the EV Range Estimator!")?;
        Ok(())
    }

    /// Collect the inputs and print a single estimate.
    ///
    /// Estimation errors are reported to the user without ending the session.
    fn run_once(&mut self) -> Result {
        let SelectedVehicle { name, parameters } = input::select_vehicle(&mut self.prompter)?;
        let DrivingConditions { speed, grade, trip_distance } =
            input::collect_driving_conditions(&mut self.prompter)?;
        let SystemParameters { drivetrain_efficiency, usable_battery } =
            input::collect_system_parameters(&mut self.prompter)?;

        let estimate = parameters
            .with_drivetrain_efficiency(drivetrain_efficiency.to_proportion())
            .and_then(|vehicle| {
                let scenario = DrivingScenario::builder()
                    .speed(speed)
                    .grade(grade)
                    .maybe_trip_distance(trip_distance)
                    .usable_battery(usable_battery)
                    .build()?;
                Estimate::calculate(self.environment, &vehicle, &scenario)
            });
        match estimate {
            Ok(estimate) => {
                info!(vehicle = %name, range = %estimate.range, "estimated");
                self.banner("RESULTS")?;
                self.prompter.say(format_args!("Vehicle: {name}"))?;
                self.prompter.say(build_estimate_table(&estimate, self.unit))?;
            }
            Err(error) => {
                warn!(vehicle = %name, %error, "failed to estimate");
                self.prompter.say(format_args!("Error: {error}"))?;
            }
        }
        self.prompter.say("")?;
        Ok(())
    }

    fn banner(&mut self, title: &str) -> Result {
        self.prompter.say(RULE)?;
        self.prompter.say(format_args!("{title:^50}"))?;
        self.prompter.say(RULE)?;
        self.prompter.say("")
    }
}
