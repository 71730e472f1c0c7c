use crate::models::TrackerView;

pub fn render_index(view: &TrackerView) -> String {
    INDEX_HTML
        .replace("{{HEADER}}", &view.header)
        .replace("{{MONTHLY_LABEL}}", &view.monthly.label)
        .replace("{{MONTHLY_WIDTH}}", &format!("{:.2}", view.monthly.percentage))
        .replace("{{YEAR}}", &view.calendar.year.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Checklist de Treinos</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #24221f;
      --muted: #6f6a65;
      --card: #ffffff;
      --accent: #2f8f5b;
      --accent-soft: rgba(47, 143, 91, 0.14);
      --pending: rgba(36, 34, 31, 0.06);
      --shadow: 0 18px 40px rgba(36, 34, 31, 0.12);
    }

    body.dark-mode {
      --bg: #151514;
      --ink: #ecebe8;
      --muted: #a5a09a;
      --card: #22211f;
      --pending: rgba(236, 235, 232, 0.08);
      --shadow: 0 18px 40px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(980px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .progress-track {
      height: 14px;
      border-radius: 999px;
      background: var(--pending);
      overflow: hidden;
    }

    .progress-bar {
      height: 100%;
      background: var(--accent);
      transition: width 250ms ease;
    }

    .treinos-container {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .treino h2 {
      margin: 0 0 8px;
      font-size: 1.2rem;
    }

    .treino ul {
      list-style: none;
      padding: 0;
      margin: 0 0 12px;
      display: grid;
      gap: 8px;
    }

    .treino label.completed {
      text-decoration: line-through;
      color: var(--muted);
    }

    .treino input[type="checkbox"] {
      width: 24px;
      height: 24px;
      vertical-align: middle;
    }

    .reset-button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      cursor: pointer;
      background: var(--pending);
      color: var(--ink);
    }

    #calendar-container {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(210px, 1fr));
      gap: 16px;
    }

    .calendar-month h3 {
      margin: 0 0 8px;
      text-transform: capitalize;
    }

    .calendar-days {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .calendar-day {
      text-align: center;
      padding: 6px 0;
      border-radius: 8px;
      background: var(--pending);
      cursor: pointer;
      font-size: 0.85rem;
    }

    .calendar-day.today {
      outline: 2px solid var(--accent);
    }

    .calendar-day.completed-day {
      background: var(--accent);
      color: white;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="warning"] {
      color: #b07a12;
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Checklist de Treinos</h1>
        <p class="subtitle" id="headerDateInfo">{{HEADER}}</p>
      </div>
      <label>
        <input type="checkbox" id="themeToggle" /> Modo escuro
      </label>
    </header>

    <section class="card">
      <div class="progress-track">
        <div class="progress-bar" id="monthlyProgressBar" style="width: {{MONTHLY_WIDTH}}%"></div>
      </div>
      <p id="monthlyProgressText">{{MONTHLY_LABEL}}</p>
    </section>

    <section class="treinos-container" id="treinos"></section>

    <div class="status" id="status" role="status" aria-live="polite"></div>

    <section class="card">
      <h2>Calendário {{YEAR}}</h2>
      <div id="calendar-container"></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const treinosEl = document.getElementById('treinos');
    const calendarEl = document.getElementById('calendar-container');
    const progressBar = document.getElementById('monthlyProgressBar');
    const progressText = document.getElementById('monthlyProgressText');
    const headerDateInfo = document.getElementById('headerDateInfo');
    const themeToggle = document.getElementById('themeToggle');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showNotices = (notices) => {
      if (!notices || notices.length === 0) {
        return;
      }
      const last = notices[notices.length - 1];
      setStatus(last.message, last.level);
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Falha na requisição');
      }
      return res.json();
    };

    const renderCategories = (categories) => {
      treinosEl.innerHTML = '';
      categories.forEach((group) => {
        const section = document.createElement('div');
        section.className = 'card treino';
        section.id = group.category;

        const title = document.createElement('h2');
        title.textContent = group.label;
        section.appendChild(title);

        const list = document.createElement('ul');
        group.exercises.forEach((exercise) => {
          const item = document.createElement('li');
          const checkbox = document.createElement('input');
          checkbox.type = 'checkbox';
          checkbox.id = exercise.id;
          checkbox.checked = exercise.checked;
          checkbox.setAttribute('aria-checked', String(exercise.checked));
          const label = document.createElement('label');
          label.htmlFor = exercise.id;
          label.textContent = ' ' + exercise.label;
          label.classList.toggle('completed', exercise.checked);
          checkbox.addEventListener('change', () => {
            if (checkbox.checked && navigator.vibrate) {
              navigator.vibrate(50);
            }
            send('POST', '/api/checkbox', { id: exercise.id, checked: checkbox.checked });
          });
          item.appendChild(checkbox);
          item.appendChild(label);
          list.appendChild(item);
        });
        section.appendChild(list);

        const progress = document.createElement('p');
        progress.id = 'progress' + group.suffix;
        progress.innerHTML = `<span id="progresso${group.suffix}">${group.checked}</span>/<span id="total${group.suffix}">${group.total}</span>`;
        section.appendChild(progress);

        const reset = document.createElement('button');
        reset.className = 'reset-button';
        reset.textContent = group.reset_label;
        reset.setAttribute('aria-label', group.reset_label);
        reset.addEventListener('click', () => {
          if (confirm(group.reset_confirmation)) {
            send('POST', '/api/reset', { category: group.category });
          }
        });
        section.appendChild(reset);

        treinosEl.appendChild(section);
      });
    };

    const renderCalendar = (calendar) => {
      calendarEl.innerHTML = '';
      calendar.months.forEach((month) => {
        const monthDiv = document.createElement('div');
        monthDiv.className = 'calendar-month';
        const header = document.createElement('h3');
        header.textContent = month.name;
        monthDiv.appendChild(header);

        const grid = document.createElement('div');
        grid.className = 'calendar-days';
        month.days.forEach((day) => {
          const cell = document.createElement('div');
          cell.className = 'calendar-day';
          cell.classList.toggle('completed-day', day.completed);
          cell.classList.toggle('today', day.is_today);
          cell.textContent = day.day;
          cell.dataset.date = day.date;
          cell.dataset.tooltip = day.tooltip;
          cell.title = day.tooltip;
          cell.addEventListener('click', () => {
            send('POST', '/api/calendar/toggle', { date: day.date });
          });
          grid.appendChild(cell);
        });
        monthDiv.appendChild(grid);
        calendarEl.appendChild(monthDiv);
      });
    };

    const render = (view) => {
      headerDateInfo.textContent = view.header;
      progressBar.style.width = view.monthly.percentage + '%';
      progressText.textContent = view.monthly.label;
      renderCategories(view.categories);
      renderCalendar(view.calendar);
      showNotices(view.notices);
    };

    const send = (method, url, body) => {
      request(method, url, body)
        .then(render)
        .catch((err) => setStatus(err.message, 'error'));
    };

    const applyTheme = (theme) => {
      const dark = theme === 'dark';
      document.body.classList.toggle('dark-mode', dark);
      document.body.classList.toggle('light-mode', !dark);
      themeToggle.checked = dark;
    };

    themeToggle.addEventListener('change', () => {
      const theme = themeToggle.checked ? 'dark' : 'light';
      applyTheme(theme);
      request('POST', '/api/theme', { theme })
        .then((res) => showNotices(res.notices))
        .catch((err) => setStatus(err.message, 'error'));
    });

    const prefersDark = window.matchMedia('(prefers-color-scheme: dark)').matches;
    request('GET', `/api/theme?prefers_dark=${prefersDark}`)
      .then((res) => applyTheme(res.theme))
      .catch((err) => setStatus(err.message, 'error'));

    send('GET', '/api/state');
  </script>
</body>
</html>
"#;
