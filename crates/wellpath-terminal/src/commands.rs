use std::sync::Arc;

use eyre::{Result, eyre};
use wellpath_api::ApiClient;
use wellpath_chat::{ChatError, spawn_poller};
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::referral::{ReferralForm, Urgency};
use wellpath_core::models::user::Role;
use wellpath_gate::{Activity, Gate, GateState, Phase, SubmitOutcome};
use wellpath_terminal::config::{self, StoredSession, WellpathConfig};
use wellpath_terminal::identity::ConfigIdentity;
use wellpath_terminal::transcript::{self, Transcript};

use crate::prompt::Prompt;

fn client_for(config: &WellpathConfig) -> Result<ApiClient> {
    Ok(ApiClient::new(config.effective_api_url())?)
}

fn require_session(config: &WellpathConfig) -> Result<&StoredSession> {
    config
        .session
        .as_ref()
        .ok_or_else(|| eyre!("not signed in: run `wellpath login <email> --password ...` first"))
}

pub async fn login(email: &str, password: &str) -> Result<()> {
    let mut config = config::load_config()?;
    let client = client_for(&config)?;

    let profile = client.login(email, password).await?;
    let session = StoredSession::from_profile(profile);
    println!("Signed in as {} ({})", session.name, session.role);

    config.session = Some(session);
    config::save_config(&config)
}

pub fn logout() -> Result<()> {
    let mut config = config::load_config()?;
    if config.session.take().is_none() {
        println!("Not signed in.");
        return Ok(());
    }
    config::save_config(&config)?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami() -> Result<()> {
    let config = config::load_config()?;
    let session = require_session(&config)?;
    println!("{} <{}>", session.name, session.email);
    println!("  role:      {}", session.role);
    println!("  user id:   {}", session.user_id);
    println!("  signed in: {}", session.signed_in_at);
    println!("  api:       {}", config.effective_api_url());
    Ok(())
}

async fn open_gate(kind: AssessmentKind) -> Result<Gate<ConfigIdentity, ApiClient>> {
    let config = config::load_config()?;
    let client = client_for(&config)?;
    let identity = ConfigIdentity::new(config::config_path()?);
    let mut gate = Gate::new(kind, identity, client);
    gate.enter().await;
    Ok(gate)
}

pub async fn status(kind: AssessmentKind) -> Result<()> {
    let gate = open_gate(kind).await?;
    let view = gate.view();
    match view.phase {
        Phase::Completed => println!("{kind}: completed"),
        Phase::InProgress => println!("{kind}: not completed"),
        Phase::Error => println!(
            "{kind}: unavailable ({})",
            view.error.unwrap_or_default()
        ),
        Phase::Loading => println!("{kind}: still loading"),
    }
    Ok(())
}

pub async fn take(kind: AssessmentKind) -> Result<()> {
    let mut gate = open_gate(kind).await?;
    let mut prompt = Prompt::new();

    loop {
        match gate.state() {
            GateState::Loading => return Err(eyre!("status lookup did not finish")),
            GateState::Completed => {
                println!("You have completed the {kind}. Thank you!");
                return Ok(());
            }
            GateState::Error(failure) => {
                println!("Could not load the {kind}: {failure}");
                if !prompt.confirm("Retry?").await? {
                    return Ok(());
                }
                gate.retry().await;
                continue;
            }
            GateState::InProgress(_) => {}
        }

        let answered = match kind {
            AssessmentKind::Scenario => answer_case(&mut gate, &mut prompt).await?,
            AssessmentKind::PreTest | AssessmentKind::PostTest => {
                answer_quiz(&mut gate, &mut prompt, kind).await?
            }
        };
        if !answered {
            println!("Leaving without submitting; answers are discarded.");
            return Ok(());
        }

        loop {
            match gate.submit().await {
                SubmitOutcome::Finished | SubmitOutcome::NotReady => break,
                SubmitOutcome::Advanced { case } => {
                    println!("Saved. Moving on to case {}.", case + 1);
                    break;
                }
                SubmitOutcome::Rejected(reason) => {
                    println!("Submission failed: {reason}");
                    if !prompt.confirm("Your answers are kept. Try again?").await? {
                        return Ok(());
                    }
                    gate.dismiss_notice();
                }
            }
        }
    }
}

/// Walk the bank section by section. Returns `false` if input ended.
async fn answer_quiz(
    gate: &mut Gate<ConfigIdentity, ApiClient>,
    prompt: &mut Prompt,
    kind: AssessmentKind,
) -> Result<bool> {
    let GateState::InProgress(progress) = gate.state() else {
        return Ok(true);
    };
    let Activity::Quiz(session) = &progress.activity else {
        return Err(eyre!("{kind} is not a multiple-choice assessment"));
    };
    let questions = session.questions().to_vec();
    let total = questions.len();

    for section in wellpath_bank::sections_of(kind) {
        if let Some(name) = &section.name {
            println!("\n== {name} ==");
        }
        for index in section.indices() {
            let question = &questions[index];
            println!("\n{}/{} {}", index + 1, total, question.text);
            for (n, option) in question.options.iter().enumerate() {
                println!("  {}. {option}", n + 1);
            }

            loop {
                let Some(line) = prompt.ask("Answer (blank to skip): ").await? else {
                    return Ok(false);
                };
                let line = line.trim();
                if line.is_empty() {
                    break;
                }
                match line.parse::<usize>() {
                    Ok(n) if (1..=question.options.len()).contains(&n) => {
                        gate.select_answer(index, n - 1);
                        break;
                    }
                    _ => println!("Enter a number from 1 to {}.", question.options.len()),
                }
            }
        }
    }

    let view = gate.view();
    println!("\nAnswered {} of {}.", view.answered, view.total);
    prompt.confirm("Submit now?").await
}

/// Collect the four responses for the active case. Returns `false` if input
/// ended.
async fn answer_case(
    gate: &mut Gate<ConfigIdentity, ApiClient>,
    prompt: &mut Prompt,
) -> Result<bool> {
    let view = gate.view();
    let (Some(index), Some(count), Some(title)) = (view.case_index, view.case_count, view.case_title)
    else {
        return Ok(true);
    };

    println!("\nCase {} of {}\n{title}", index + 1, count);
    for (n, question) in wellpath_core::models::question::CASE_PROMPTS.iter().enumerate() {
        println!("\n{}. {question}", n + 1);
        let Some(line) = prompt.ask("> ").await? else {
            return Ok(false);
        };
        gate.edit_response(n, line.trim());
    }
    Ok(true)
}

pub async fn referrals() -> Result<()> {
    let config = config::load_config()?;
    let session = require_session(&config)?;
    let client = client_for(&config)?;

    let referrals = client
        .referrals(&session.user_id.to_string(), session.role)
        .await?;
    if referrals.is_empty() {
        println!("No referrals.");
        return Ok(());
    }
    for r in referrals {
        let doctor = r.doctor_id.as_deref().unwrap_or("unassigned");
        println!(
            "#{:<5} student {:<8} doctor {:<10} [{}] {}",
            r.id, r.student_id, doctor, r.status, r.reason
        );
    }
    Ok(())
}

pub async fn refer(student: &str, reason: &str, urgency: Urgency) -> Result<()> {
    let config = config::load_config()?;
    let session = require_session(&config)?;
    if session.role != Role::Counselor {
        return Err(eyre!("only counselors can open referrals"));
    }
    let client = client_for(&config)?;

    client
        .submit_referral(ReferralForm {
            student_id: student.to_string(),
            counselor_id: session.user_id.to_string(),
            reason: reason.to_string(),
            urgency,
        })
        .await?;
    println!("Referral submitted for student {student}.");
    Ok(())
}

pub async fn chat(referral_id: u64) -> Result<()> {
    let config = config::load_config()?;
    let session = require_session(&config)?;
    let client = Arc::new(client_for(&config)?);
    let referral = transcript::find_referral(
        client
            .referrals(&session.user_id.to_string(), session.role)
            .await?,
        referral_id,
    )?;
    let me = session.user_id.to_string();

    println!("Chat for referral #{referral_id}. Type a message and press enter; /quit to leave.");

    let handle = spawn_poller(client.clone(), referral_id, config.poll_interval());
    let mut updates = handle.subscribe();
    let mut shown = Transcript::new(me.as_str());
    let mut prompt = Prompt::new();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let messages = updates.borrow_and_update().clone();
                for line in shown.fresh_lines(&messages) {
                    println!("{line}");
                }
            }
            line = prompt.next_line() => {
                let Some(line) = line? else { break };
                if line.trim() == "/quit" {
                    break;
                }
                match wellpath_chat::send(client.as_ref(), &referral, session.role, &me, &line).await {
                    Ok(_) => {}
                    Err(ChatError::EmptyMessage) => {}
                    Err(e) => println!("! {e}"),
                }
            }
        }
    }

    handle.stop().await;
    Ok(())
}
