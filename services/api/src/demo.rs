use crate::infra::{InMemoryLocationStore, InMemorySlotRepository};
use chrono::NaiveTime;
use clap::Args;
use std::sync::Arc;
use tutoria::error::AppError;
use tutoria::location::{DistanceGate, LocationDecision, LocationService};
use tutoria::scheduling::domain::{AvailabilitySlot, DayOfWeek, TutorId};
use tutoria::scheduling::AvailabilityService;
use tutoria::users::UserId;

#[derive(Args, Debug)]
pub(crate) struct TutorSearchArgs {
    /// Three-letter day code (MON..SUN)
    #[arg(long, default_value = "MON")]
    pub(crate) day: String,
    /// Window start (HH:MM)
    #[arg(long, default_value = "10:00", value_parser = crate::infra::parse_time)]
    pub(crate) start: NaiveTime,
    /// Window end (HH:MM)
    #[arg(long, default_value = "11:00", value_parser = crate::infra::parse_time)]
    pub(crate) end: NaiveTime,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the location update portion of the demo
    #[arg(long)]
    pub(crate) skip_location: bool,
}

pub(crate) fn run_tutor_search(args: TutorSearchArgs) -> Result<(), AppError> {
    let service = sample_availability_service()?;

    let found = service
        .find_available_tutors(&args.day, args.start, args.end)
        .map_err(|err| AppError::Input(err.to_string()))?;

    println!(
        "Tutors free {} {}-{} (entire window):",
        args.day.trim().to_ascii_uppercase(),
        args.start.format("%H:%M"),
        args.end.format("%H:%M")
    );
    if found.is_empty() {
        println!("  none");
    } else {
        for TutorId(id) in found {
            println!("  - {id}");
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Tutoria marketplace demo");

    let service = sample_availability_service()?;
    println!("\nSample roster: junaid, tarikul, tasmin (MON), diana (TUE)");

    for (start, end) in [((10, 0), (11, 0)), ((12, 30), (13, 30))] {
        let window_start = time(start.0, start.1);
        let window_end = time(end.0, end.1);
        let found = service
            .find_available_tutors("MON", window_start, window_end)
            .map_err(|err| AppError::Input(err.to_string()))?;
        let names: Vec<String> = found.into_iter().map(|TutorId(id)| id).collect();
        println!(
            "- MON {}-{} -> {}",
            window_start.format("%H:%M"),
            window_end.format("%H:%M"),
            if names.is_empty() {
                "no tutor covers the window".to_string()
            } else {
                names.join(", ")
            }
        );
    }

    if args.skip_location {
        return Ok(());
    }

    println!("\nLocation update walkthrough");
    let store = Arc::new(InMemoryLocationStore::default());
    let location_service = LocationService::new(DistanceGate::default(), store.clone());
    let student = UserId("student-7".to_string());

    let first = "23.4567,90.1234,10";
    let moved = "23.45895,90.1234,10";

    report_decision(
        "first fix",
        location_service
            .submit(&student, Some(first), false)
            .map_err(|err| AppError::Input(err.to_string()))?,
    );
    report_decision(
        "moved ~250 m",
        location_service
            .submit(&student, Some(moved), false)
            .map_err(|err| AppError::Input(err.to_string()))?,
    );
    report_decision(
        "confirmed",
        location_service
            .submit(&student, Some(moved), true)
            .map_err(|err| AppError::Input(err.to_string()))?,
    );

    match store.stored(&student) {
        Some(stored) => println!("Stored location is now {stored}"),
        None => println!("No location stored"),
    }

    Ok(())
}

fn report_decision(step: &str, decision: LocationDecision) {
    match decision {
        LocationDecision::Accepted { stored } => println!("- {step}: accepted ({stored})"),
        LocationDecision::NeedsConfirmation { distance_km } => {
            println!("- {step}: needs confirmation ({distance_km} km away)")
        }
        LocationDecision::Unchanged => println!("- {step}: unchanged"),
    }
}

fn sample_availability_service() -> Result<AvailabilityService<InMemorySlotRepository>, AppError> {
    let service = AvailabilityService::new(Arc::new(InMemorySlotRepository::default()));

    let declarations = [
        ("junaid", DayOfWeek::Monday, (9, 0), (12, 0)),
        ("junaid", DayOfWeek::Monday, (14, 0), (17, 0)),
        ("junaid", DayOfWeek::Tuesday, (10, 0), (13, 0)),
        ("tarikul", DayOfWeek::Monday, (10, 0), (13, 0)),
        ("tarikul", DayOfWeek::Wednesday, (9, 0), (12, 0)),
        ("tasmin", DayOfWeek::Monday, (9, 30), (11, 30)),
        ("tasmin", DayOfWeek::Monday, (15, 0), (16, 0)),
        ("diana", DayOfWeek::Tuesday, (9, 0), (17, 0)),
    ];

    for (tutor, day, start, end) in declarations {
        service
            .declare_slot(AvailabilitySlot {
                tutor_id: TutorId(tutor.to_string()),
                day_of_week: day,
                start_time: time(start.0, start.1),
                end_time: time(end.0, end.1),
            })
            .map_err(|err| AppError::Input(err.to_string()))?;
    }

    Ok(service)
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid demo time")
}
