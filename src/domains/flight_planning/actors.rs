// Flight planning actors - forwards domain events to the host as envelopes
use crate::common::{EventEnvelope, EventMetadata};
use crate::domains::flight_planning::events::FlightPlanningEvent;
use tokio::sync::mpsc;

pub struct FlightPlanningCommandActor {
    event_sender: mpsc::Sender<EventEnvelope>,
    source: String,
}

impl FlightPlanningCommandActor {
    pub fn new(event_sender: mpsc::Sender<EventEnvelope>) -> Self {
        Self {
            event_sender,
            source: "kestrel-app".to_string(),
        }
    }

    /// Wrap the aggregate's uncommitted events into envelopes and hand them
    /// to the host's event channel.
    pub async fn publish_events(&self, events: &[FlightPlanningEvent]) -> Result<(), String> {
        for event in events {
            let envelope = EventEnvelope::new(
                event,
                "FieldPlanner",
                EventMetadata {
                    correlation_id: None,
                    causation_id: None,
                    user_id: None,
                    source: self.source.clone(),
                },
            )
            .map_err(|e| format!("Failed to wrap event: {}", e))?;

            self.event_sender
                .send(envelope)
                .await
                .map_err(|e| format!("Failed to send event: {}", e))?;
        }
        Ok(())
    }
}
